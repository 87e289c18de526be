pub mod classify_frame_use_case;
pub mod error;
pub mod frame_decoder;
pub mod frame_payload;
pub mod verdict;
