/// Engine parameters fixed at process start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Search time per query
    pub thinking_time_ms: u64,
    /// `Threads` UCI option
    pub threads: u32,
    /// `Hash` UCI option, in MB
    pub hash_mb: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            thinking_time_ms: 1000,
            threads: 4,
            hash_mb: 128,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.thinking_time_ms, 1000);
        assert_eq!(config.threads, 4);
        assert_eq!(config.hash_mb, 128);
    }
}
