//! Embassy async tasks
//!
//! Each task runs independently and communicates via the statics in
//! `channels`.

pub mod button;
pub mod capture;
pub mod decode;
pub mod stream;

pub use button::button_task;
pub use capture::capture_task;
pub use decode::decode_task;
pub use stream::stream_task;
