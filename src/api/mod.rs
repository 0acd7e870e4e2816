pub mod admin;
pub mod entries;
pub mod headers;
pub mod hues;
pub mod map;
pub mod question;

pub use admin::{handle_import, handle_prune, ImportResponse, PruneResponse};
pub use admin::{__path_handle_import, __path_handle_prune};
pub use entries::{
    handle_entries, handle_entry_stream, handle_export, handle_stats, handle_submit,
    StatsResponse, SubmitRequest, SubmitResponse,
};
pub use entries::{
    __path_handle_entries, __path_handle_entry_stream, __path_handle_export, __path_handle_stats,
    __path_handle_submit,
};
pub use hues::{handle_hues, HueInfo, __path_handle_hues};
pub use map::{handle_map, BoundaryPoint, MapPoint, MapResponse, __path_handle_map};
pub use question::{handle_question, QuestionQuery, __path_handle_question};
