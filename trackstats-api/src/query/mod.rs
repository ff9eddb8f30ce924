//! Read-only queries over the loaded track table
//!
//! Every query is a bounded, synchronous computation over borrowed data, so
//! handlers call these directly without locking.

pub mod artists;
pub mod diagnostics;
pub mod platforms;
pub mod sample;

pub use artists::{top_artists, ArtistStreams, TOP_ARTISTS_LIMIT};
pub use diagnostics::{debug_info, DebugInfo};
pub use platforms::{platform_summary, PlatformStats, PLATFORM_COLUMNS};
pub use sample::{sample, TrackSample, SAMPLE_LIMIT};
