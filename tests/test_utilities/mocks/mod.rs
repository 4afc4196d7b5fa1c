/// Mock implementations for testing
mod in_memory_metadata_cache;
mod mock_analytics_source;
mod mock_edge_reader;
mod mock_metadata_repository;
mod mock_progress_reporter;

#[allow(unused_imports)]
pub use in_memory_metadata_cache::InMemoryMetadataCache;
#[allow(unused_imports)]
pub use mock_analytics_source::MockAnalyticsSource;
#[allow(unused_imports)]
pub use mock_edge_reader::MockEdgeReader;
#[allow(unused_imports)]
pub use mock_metadata_repository::MockMetadataRepository;
#[allow(unused_imports)]
pub use mock_progress_reporter::MockProgressReporter;
