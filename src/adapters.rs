use crate::model;

#[cfg(test)]
pub mod mock;
pub mod s3;

pub trait ObjectStore {
    async fn download_object(
        &self,
        bucket: &str,
        key: &str,
    ) -> Result<Vec<u8>, model::error::ThumbError>;

    async fn upload_object(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
    ) -> Result<(), model::error::ThumbError>;
}
