pub mod buckets;
pub mod progress;
pub mod semester;

pub use buckets::bucket_health;
pub use progress::resolve_progress_dimensions;
pub use semester::resolve_semester_dimensions;
