use std::path::PathBuf;

use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};

use crate::dictionary::{FileDictionary, SYSTEM_DICTIONARY};

/// Settings for loading a tree and running batch suggestions.
#[derive(Debug, Clone)]
pub struct Config {
    /// Line-delimited word list to load.
    pub dictionary: PathBuf,
    /// Worker threads for batch suggestions. `None` uses rayon's default.
    pub worker_threads: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: PathBuf::from(SYSTEM_DICTIONARY),
            worker_threads: None,
        }
    }
}

impl Config {
    pub fn dictionary(&self) -> FileDictionary {
        FileDictionary::new(&self.dictionary)
    }

    /// A dedicated pool sized by `worker_threads`.
    pub fn thread_pool(&self) -> Result<ThreadPool, ThreadPoolBuildError> {
        let mut builder = ThreadPoolBuilder::new().thread_name(|i| format!("suggest-{i}"));
        if let Some(n) = self.worker_threads {
            builder = builder.num_threads(n);
        }
        builder.build()
    }
}
