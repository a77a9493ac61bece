use std::{collections::HashMap, sync::Mutex};

use crate::{adapters, model};

/// In-memory store for handler tests. Records the order of downloads so
/// tests can assert which records a batch actually reached.
pub struct MockStore {
    pub objects: Mutex<HashMap<(String, String), Vec<u8>>>,
    pub downloads: Mutex<Vec<String>>,
    pub fail_keys: Mutex<Vec<String>>,
}

impl MockStore {
    pub fn new() -> Self {
        Self {
            objects: Mutex::new(HashMap::new()),
            downloads: Mutex::new(Vec::new()),
            fail_keys: Mutex::new(Vec::new()),
        }
    }

    pub fn insert_object(&self, bucket: &str, key: &str, body: Vec<u8>) {
        self.objects
            .lock()
            .expect("failed to acquire `objects` guard")
            .insert((bucket.to_string(), key.to_string()), body);
    }

    pub fn fail_download(&self, key: &str) {
        self.fail_keys
            .lock()
            .expect("failed to acquire `fail_keys` guard")
            .push(key.to_string());
    }

    pub fn get_object(&self, bucket: &str, key: &str) -> Option<Vec<u8>> {
        self.objects
            .lock()
            .expect("failed to acquire `objects` guard")
            .get(&(bucket.to_string(), key.to_string()))
            .cloned()
    }

    pub fn downloaded_keys(&self) -> Vec<String> {
        self.downloads
            .lock()
            .expect("failed to acquire `downloads` guard")
            .clone()
    }
}

impl adapters::ObjectStore for MockStore {
    async fn download_object(
        &self,
        bucket: &str,
        key: &str,
    ) -> Result<Vec<u8>, model::error::ThumbError> {
        self.downloads
            .lock()
            .expect("failed to acquire `downloads` guard")
            .push(key.to_string());

        let failing = self
            .fail_keys
            .lock()
            .expect("failed to acquire `fail_keys` guard")
            .iter()
            .any(|k| k == key);
        if failing {
            return Err(model::error::ThumbError {
                message: format!("failed to get_object: {}, injected failure", key),
            });
        }

        self.get_object(bucket, key)
            .ok_or_else(|| model::error::ThumbError {
                message: format!("failed to get_object: {}, no such key", key),
            })
    }

    async fn upload_object(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
    ) -> Result<(), model::error::ThumbError> {
        self.insert_object(bucket, key, body);

        Ok(())
    }
}
