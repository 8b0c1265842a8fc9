pub mod analyze_transcript_use_case;
