//! DynamoDB-backed implementation of [`TableStore`].

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::config::Region;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use tracing::debug;

use dynascope_model::types::Item;
use dynascope_model::{ItemKey, TableDescription};

use crate::config::StoreConfig;
use crate::convert;
use crate::error::{DynascopeError, DynascopeResult};
use crate::store::TableStore;

/// A [`TableStore`] backed by the AWS DynamoDB SDK.
///
/// One client is constructed at the start of a run and passed into each
/// operation. Credentials come from the standard provider chain
/// (environment, shared config, instance metadata).
#[derive(Debug, Clone)]
pub struct DynamoTableStore {
    client: Client,
}

impl DynamoTableStore {
    /// Connect using the given configuration.
    pub async fn connect(config: &StoreConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()));
        if let Some(url) = &config.endpoint_url {
            loader = loader.endpoint_url(url.clone());
        }
        let shared = loader.load().await;
        debug!(region = %config.region, "constructed store client");
        Self {
            client: Client::new(&shared),
        }
    }

    /// Wrap an already-built SDK client.
    #[must_use]
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    fn store_error<E>(operation: &'static str, err: E) -> DynascopeError
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        DynascopeError::store(operation, format!("{}", DisplayErrorContext(&err)))
    }
}

#[async_trait]
impl TableStore for DynamoTableStore {
    async fn list_tables(&self) -> DynascopeResult<Vec<String>> {
        let mut names = Vec::new();
        let mut start_from: Option<String> = None;

        // Follow LastEvaluatedTableName until the listing is exhausted.
        loop {
            let mut request = self.client.list_tables();
            if let Some(token) = start_from.take() {
                request = request.exclusive_start_table_name(token);
            }
            let response = request
                .send()
                .await
                .map_err(|e| Self::store_error("ListTables", e))?;
            names.extend_from_slice(response.table_names());
            match response.last_evaluated_table_name() {
                Some(token) => start_from = Some(token.to_owned()),
                None => break,
            }
        }

        debug!(tables = names.len(), "listed store tables");
        Ok(names)
    }

    async fn describe_table(&self, table: &str) -> DynascopeResult<TableDescription> {
        let response = self
            .client
            .describe_table()
            .table_name(table)
            .send()
            .await
            .map_err(|e| Self::store_error("DescribeTable", e))?;
        response
            .table()
            .map(convert::table_description)
            .ok_or_else(|| {
                DynascopeError::store("DescribeTable", format!("empty descriptor for {table}"))
            })
    }

    async fn get_item(&self, table: &str, key: &ItemKey) -> DynascopeResult<Option<Item>> {
        let mut request = self.client.get_item().table_name(table);
        for (name, value) in key.to_attribute_map() {
            request = request.key(name, convert::attribute_to_sdk(&value));
        }
        let response = request
            .send()
            .await
            .map_err(|e| Self::store_error("GetItem", e))?;
        Ok(response.item().map(convert::item_from_sdk))
    }
}
