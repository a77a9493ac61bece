use crate::{adapters, model};

impl adapters::ObjectStore for aws_sdk_s3::Client {
    async fn download_object(
        &self,
        bucket: &str,
        key: &str,
    ) -> Result<Vec<u8>, model::error::ThumbError> {
        let out = self
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|err| model::error::ThumbError {
                message: format!("failed to get_object: {}, {}", key, err),
            })?;

        let bytes = out
            .body
            .collect()
            .await
            .map_err(|err| model::error::ThumbError {
                message: format!("failed to collect body: {}, {}", key, err),
            })?;

        Ok(bytes.into_bytes().to_vec())
    }

    async fn upload_object(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
    ) -> Result<(), model::error::ThumbError> {
        self.put_object()
            .bucket(bucket)
            .key(key)
            .body(aws_sdk_s3::primitives::ByteStream::from(body))
            .content_type("image/jpeg")
            .send()
            .await
            .map_err(|err| model::error::ThumbError {
                message: format!("failed to put_object at: {}, {}", key, err),
            })?;

        Ok(())
    }
}
