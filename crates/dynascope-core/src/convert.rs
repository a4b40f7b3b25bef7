//! Conversions from AWS SDK response types into the dynascope model.
//!
//! The SDK hands descriptors back with epoch-second timestamps and
//! non-exhaustive enums; these helpers map them into the model's wire types,
//! turning every timestamp into a [`Timestamp`] and preserving enum values
//! this crate does not know through the `Unknown` variants.

use std::collections::HashMap;

use aws_sdk_dynamodb::primitives::{Blob, DateTime as SdkDateTime};
use aws_sdk_dynamodb::types as sdk;

use dynascope_model::AttributeValue;
use dynascope_model::timestamp::Timestamp;
use dynascope_model::types::{
    AttributeDefinition, BillingMode, BillingModeSummary, GlobalSecondaryIndexDescription,
    IndexStatus, Item, KeySchemaElement, KeyType, LocalSecondaryIndexDescription, Projection,
    ProjectionType, ProvisionedThroughputDescription, SSEDescription, ScalarAttributeType,
    SseStatus, SseType, StreamSpecification, StreamViewType, TableDescription, TableStatus,
};

pub(crate) fn table_description(desc: &sdk::TableDescription) -> TableDescription {
    TableDescription {
        table_name: desc.table_name().map(ToOwned::to_owned),
        table_status: desc.table_status().map(|s| TableStatus::from(s.as_str())),
        key_schema: desc.key_schema().iter().map(key_schema_element).collect(),
        attribute_definitions: desc
            .attribute_definitions()
            .iter()
            .map(attribute_definition)
            .collect(),
        creation_date_time: desc.creation_date_time().map(timestamp),
        item_count: desc.item_count(),
        table_size_bytes: desc.table_size_bytes(),
        table_arn: desc.table_arn().map(ToOwned::to_owned),
        table_id: desc.table_id().map(ToOwned::to_owned),
        billing_mode_summary: desc.billing_mode_summary().map(billing_mode_summary),
        provisioned_throughput: desc.provisioned_throughput().map(provisioned_throughput),
        global_secondary_indexes: desc
            .global_secondary_indexes()
            .iter()
            .map(global_secondary_index)
            .collect(),
        local_secondary_indexes: desc
            .local_secondary_indexes()
            .iter()
            .map(local_secondary_index)
            .collect(),
        stream_specification: desc.stream_specification().map(stream_specification),
        latest_stream_arn: desc.latest_stream_arn().map(ToOwned::to_owned),
        latest_stream_label: desc.latest_stream_label().map(ToOwned::to_owned),
        sse_description: desc.sse_description().map(sse_description),
        deletion_protection_enabled: desc.deletion_protection_enabled(),
    }
}

fn timestamp(instant: &SdkDateTime) -> Timestamp {
    Timestamp::from_epoch(instant.secs(), instant.subsec_nanos())
}

fn key_schema_element(elem: &sdk::KeySchemaElement) -> KeySchemaElement {
    KeySchemaElement {
        attribute_name: elem.attribute_name().to_owned(),
        key_type: KeyType::from(elem.key_type().as_str()),
    }
}

fn attribute_definition(def: &sdk::AttributeDefinition) -> AttributeDefinition {
    AttributeDefinition {
        attribute_name: def.attribute_name().to_owned(),
        attribute_type: ScalarAttributeType::from(def.attribute_type().as_str()),
    }
}

fn billing_mode_summary(summary: &sdk::BillingModeSummary) -> BillingModeSummary {
    BillingModeSummary {
        billing_mode: summary.billing_mode().map(|m| BillingMode::from(m.as_str())),
        last_update_to_pay_per_request_date_time: summary
            .last_update_to_pay_per_request_date_time()
            .map(timestamp),
    }
}

fn provisioned_throughput(
    throughput: &sdk::ProvisionedThroughputDescription,
) -> ProvisionedThroughputDescription {
    ProvisionedThroughputDescription {
        read_capacity_units: throughput.read_capacity_units(),
        write_capacity_units: throughput.write_capacity_units(),
        number_of_decreases_today: throughput.number_of_decreases_today(),
        last_increase_date_time: throughput.last_increase_date_time().map(timestamp),
        last_decrease_date_time: throughput.last_decrease_date_time().map(timestamp),
    }
}

fn projection(projection: &sdk::Projection) -> Projection {
    Projection {
        projection_type: projection
            .projection_type()
            .map(|p| ProjectionType::from(p.as_str())),
        non_key_attributes: projection.non_key_attributes().to_vec(),
    }
}

fn global_secondary_index(
    index: &sdk::GlobalSecondaryIndexDescription,
) -> GlobalSecondaryIndexDescription {
    GlobalSecondaryIndexDescription {
        index_name: index.index_name().map(ToOwned::to_owned),
        key_schema: index.key_schema().iter().map(key_schema_element).collect(),
        projection: index.projection().map(projection),
        index_status: index.index_status().map(|s| IndexStatus::from(s.as_str())),
        backfilling: index.backfilling(),
        provisioned_throughput: index.provisioned_throughput().map(provisioned_throughput),
        index_size_bytes: index.index_size_bytes(),
        item_count: index.item_count(),
        index_arn: index.index_arn().map(ToOwned::to_owned),
    }
}

fn local_secondary_index(
    index: &sdk::LocalSecondaryIndexDescription,
) -> LocalSecondaryIndexDescription {
    LocalSecondaryIndexDescription {
        index_name: index.index_name().map(ToOwned::to_owned),
        key_schema: index.key_schema().iter().map(key_schema_element).collect(),
        projection: index.projection().map(projection),
        index_size_bytes: index.index_size_bytes(),
        item_count: index.item_count(),
        index_arn: index.index_arn().map(ToOwned::to_owned),
    }
}

fn stream_specification(spec: &sdk::StreamSpecification) -> StreamSpecification {
    StreamSpecification {
        stream_enabled: Some(spec.stream_enabled()),
        stream_view_type: spec
            .stream_view_type()
            .map(|v| StreamViewType::from(v.as_str())),
    }
}

fn sse_description(sse: &sdk::SseDescription) -> SSEDescription {
    SSEDescription {
        status: sse.status().map(|s| SseStatus::from(s.as_str())),
        sse_type: sse.sse_type().map(|t| SseType::from(t.as_str())),
        kms_master_key_arn: sse.kms_master_key_arn().map(ToOwned::to_owned),
        inaccessible_encryption_date_time: sse.inaccessible_encryption_date_time().map(timestamp),
    }
}

pub(crate) fn attribute_to_sdk(value: &AttributeValue) -> sdk::AttributeValue {
    match value {
        AttributeValue::S(s) => sdk::AttributeValue::S(s.clone()),
        AttributeValue::N(n) => sdk::AttributeValue::N(n.clone()),
        AttributeValue::B(b) => sdk::AttributeValue::B(Blob::new(b.to_vec())),
        AttributeValue::Ss(v) => sdk::AttributeValue::Ss(v.clone()),
        AttributeValue::Ns(v) => sdk::AttributeValue::Ns(v.clone()),
        AttributeValue::Bs(v) => {
            sdk::AttributeValue::Bs(v.iter().map(|b| Blob::new(b.to_vec())).collect())
        }
        AttributeValue::Bool(b) => sdk::AttributeValue::Bool(*b),
        AttributeValue::Null(b) => sdk::AttributeValue::Null(*b),
        AttributeValue::L(list) => {
            sdk::AttributeValue::L(list.iter().map(attribute_to_sdk).collect())
        }
        AttributeValue::M(map) => sdk::AttributeValue::M(
            map.iter()
                .map(|(k, v)| (k.clone(), attribute_to_sdk(v)))
                .collect(),
        ),
    }
}

pub(crate) fn attribute_from_sdk(value: &sdk::AttributeValue) -> AttributeValue {
    match value {
        sdk::AttributeValue::S(s) => AttributeValue::S(s.clone()),
        sdk::AttributeValue::N(n) => AttributeValue::N(n.clone()),
        sdk::AttributeValue::B(b) => AttributeValue::B(bytes::Bytes::copy_from_slice(b.as_ref())),
        sdk::AttributeValue::Ss(v) => AttributeValue::Ss(v.clone()),
        sdk::AttributeValue::Ns(v) => AttributeValue::Ns(v.clone()),
        sdk::AttributeValue::Bs(v) => AttributeValue::Bs(
            v.iter()
                .map(|b| bytes::Bytes::copy_from_slice(b.as_ref()))
                .collect(),
        ),
        sdk::AttributeValue::Bool(b) => AttributeValue::Bool(*b),
        sdk::AttributeValue::Null(b) => AttributeValue::Null(*b),
        sdk::AttributeValue::L(list) => {
            AttributeValue::L(list.iter().map(attribute_from_sdk).collect())
        }
        sdk::AttributeValue::M(map) => AttributeValue::M(
            map.iter()
                .map(|(k, v)| (k.clone(), attribute_from_sdk(v)))
                .collect(),
        ),
        // The SDK reserves room for value kinds added after this crate;
        // render them as explicit nulls rather than dropping the attribute.
        _ => AttributeValue::Null(true),
    }
}

pub(crate) fn item_from_sdk(item: &HashMap<String, sdk::AttributeValue>) -> Item {
    item.iter()
        .map(|(name, value)| (name.clone(), attribute_from_sdk(value)))
        .collect()
}
