pub(crate) mod bytes;
mod time;

pub use self::time::{FRAMES_PER_SECOND, FrameTime, frames_to_time};
