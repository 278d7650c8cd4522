//! [`TxtRecordStore`] implementation over the LiveDNS record resource.

use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::traits::TxtRecordStore;
use crate::types::{unquote_txt_value, RecordSetReplacement, ResourceRecordSet};

use super::{LiveDnsClient, RECORD_TTL};

#[async_trait]
impl TxtRecordStore for LiveDnsClient {
    async fn get_values(&self, zone: &str, entry: &str) -> Result<Vec<String>> {
        let (status, body) = self.get_request(&self.txt_record_url(zone, entry)).await?;
        match status {
            404 => Ok(Vec::new()),
            200 => {
                let rrset: ResourceRecordSet =
                    serde_json::from_str(&body).map_err(|e| ProviderError::Parse {
                        detail: e.to_string(),
                    })?;
                Ok(rrset
                    .values
                    .iter()
                    .map(|value| unquote_txt_value(value))
                    .collect())
            }
            status => Err(ProviderError::UnexpectedStatus { status }),
        }
    }

    async fn create(&self, zone: &str, entry: &str, values: &[String]) -> Result<()> {
        let body = ResourceRecordSet {
            record_type: "TXT".to_string(),
            ttl: RECORD_TTL,
            name: entry.to_string(),
            values: values.to_vec(),
        };
        match self.post_json(&self.records_url(zone), &body).await? {
            200 | 201 => Ok(()),
            status => Err(ProviderError::UnexpectedStatus { status }),
        }
    }

    async fn update(&self, zone: &str, entry: &str, values: &[String]) -> Result<()> {
        let body = RecordSetReplacement {
            ttl: RECORD_TTL,
            values: values.to_vec(),
        };
        match self
            .put_json(&self.txt_record_url(zone, entry), &body)
            .await?
        {
            200 | 201 => Ok(()),
            status => Err(ProviderError::UnexpectedStatus { status }),
        }
    }

    async fn delete(&self, zone: &str, entry: &str) -> Result<()> {
        match self
            .delete_request(&self.txt_record_url(zone, entry))
            .await?
        {
            200 | 204 => Ok(()),
            status => Err(ProviderError::UnexpectedStatus { status }),
        }
    }
}
