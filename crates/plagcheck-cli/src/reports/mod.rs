mod tables;

pub use self::tables::{
    sources as print_sources_report, statistics as print_statistics_report,
    upload as print_upload_report, verdict as print_verdict_report,
};
