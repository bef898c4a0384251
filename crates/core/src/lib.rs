pub mod audio {
    pub mod domain {
        pub mod audio_reader;
        pub mod audio_segment;
        pub mod speech_recognizer;
    }
    pub mod infrastructure {
        pub mod ffmpeg_audio_reader;
        pub mod whisper_recognizer;
    }
}

pub mod dictionary {
    pub mod domain {
        pub mod dictionary_error;
    }
    pub mod infrastructure {
        pub mod dictionary_downloader;
        pub mod dictionary_editor;
        pub mod dictionary_file;
    }
}

pub mod pipeline {
    pub mod file_discovery;
    pub mod quarantine;
    pub mod scan_executor;
    pub mod scan_files_use_case;
    pub mod scan_logger;
    pub mod infrastructure {
        pub mod threaded_scan_executor;
    }
}

pub mod reporting {
    pub mod domain {
        pub mod aggregate_report;
        pub mod file_report;
        pub mod report_writer;
        pub mod scan_results;
    }
    pub mod infrastructure {
        pub mod fs_report_writer;
    }
}

pub mod scanning {
    pub mod domain {
        pub mod bad_word_matcher;
        pub mod match_counts;
        pub mod match_mode;
        pub mod text_normalizer;
        pub mod tokenizer;
        pub mod word_set;
    }
}

pub mod shared {
    pub mod config_error;
    pub mod constants;
    pub mod download;
    pub mod model_resolver;
}
