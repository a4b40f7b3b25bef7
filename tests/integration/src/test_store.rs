//! Store client tests against a running DynamoDB-compatible endpoint.

#[cfg(test)]
mod tests {
    use aws_sdk_dynamodb::types::AttributeValue as SdkAttributeValue;

    use dynascope_core::TableStore;
    use dynascope_core::inspector::TableInspector;
    use dynascope_core::lookup::{ItemLookup, LookupOutcome};
    use dynascope_model::{AttributeValue, ItemKey};

    use crate::{cleanup_table, create_entries_table, sdk_client, store, test_table_name};

    #[tokio::test]
    #[ignore = "requires running DynamoDB endpoint"]
    async fn test_should_list_created_table() {
        let client = sdk_client();
        let table_name = test_table_name("list");

        create_entries_table(&client, &table_name).await;

        let names = store().list_tables().await.unwrap();
        assert!(names.contains(&table_name));

        cleanup_table(&client, &table_name).await;
    }

    #[tokio::test]
    #[ignore = "requires running DynamoDB endpoint"]
    async fn test_should_describe_table_with_iso_timestamps() {
        let client = sdk_client();
        let table_name = test_table_name("describe");

        create_entries_table(&client, &table_name).await;

        let descriptor = store().describe_table(&table_name).await.unwrap();
        assert_eq!(descriptor.table_name.as_deref(), Some(table_name.as_str()));
        assert_eq!(descriptor.key_schema.len(), 2);
        assert_eq!(descriptor.key_schema[0].attribute_name, "tournamentId");

        // Timestamps must render as ISO-8601 strings in the JSON dump.
        let json = serde_json::to_string_pretty(&descriptor).unwrap();
        if descriptor.creation_date_time.is_some() {
            assert!(json.contains(r#""CreationDateTime": ""#));
        }

        cleanup_table(&client, &table_name).await;
    }

    #[tokio::test]
    #[ignore = "requires running DynamoDB endpoint"]
    async fn test_should_error_on_describe_nonexistent_table() {
        let err = store().describe_table("nonexistent-table-xyz").await;
        assert!(err.is_err());
    }

    #[tokio::test]
    #[ignore = "requires running DynamoDB endpoint"]
    async fn test_should_inspect_into_report_blocks() {
        let client = sdk_client();
        let table_name = test_table_name("inspect");

        create_entries_table(&client, &table_name).await;

        let inspector = TableInspector::new(store());
        let mut report = Vec::new();
        let mut console = Vec::new();
        let summary = inspector
            .inspect_into(&mut report, &mut console)
            .await
            .unwrap();

        assert!(summary.described.contains(&table_name));
        let text = String::from_utf8(report).unwrap();
        assert!(text.contains(&format!("Table Name: {table_name}")));

        cleanup_table(&client, &table_name).await;
    }

    #[tokio::test]
    #[ignore = "requires running DynamoDB endpoint"]
    async fn test_should_get_existing_item_unchanged() {
        let client = sdk_client();
        let table_name = test_table_name("getitem");

        create_entries_table(&client, &table_name).await;

        client
            .put_item()
            .table_name(&table_name)
            .item(
                "tournamentId",
                SdkAttributeValue::S("2024-12-15".to_owned()),
            )
            .item("userId", SdkAttributeValue::S("user-1".to_owned()))
            .item("score", SdkAttributeValue::N("180".to_owned()))
            .send()
            .await
            .unwrap();

        let key = ItemKey::new("tournamentId", "2024-12-15").with_sort("userId", "user-1");
        let lookup = ItemLookup::new(store());
        let outcome = lookup.find(&table_name, &key).await.unwrap();

        let LookupOutcome::Found(item) = outcome else {
            panic!("expected item to be found");
        };
        assert_eq!(
            item.get("score").and_then(AttributeValue::as_n),
            Some("180")
        );

        cleanup_table(&client, &table_name).await;
    }

    #[tokio::test]
    #[ignore = "requires running DynamoDB endpoint"]
    async fn test_should_report_absent_item_as_missing() {
        let client = sdk_client();
        let table_name = test_table_name("missing");

        create_entries_table(&client, &table_name).await;

        let key = ItemKey::new("tournamentId", "2024-12-15")
            .with_sort("userId", "12ab9a21-3fc7-478e-b094-ba258a17951e");
        let lookup = ItemLookup::new(store());
        let outcome = lookup.find(&table_name, &key).await.unwrap();

        assert_eq!(outcome, LookupOutcome::Missing);
        assert_eq!(outcome.status_line(), "Item not found.");

        cleanup_table(&client, &table_name).await;
    }
}
