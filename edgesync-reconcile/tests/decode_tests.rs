//! Tests for decode.rs — legacy/current decode duality.

use edgesync_model::{CredentialsType, Device};
use edgesync_reconcile::{
    decode_credentials, decode_device, decode_resource, CredentialsFields, CredentialsUpdateMsg,
    DecodeError, DeviceFields, DeviceUpdateMsg, JsonPayloadCodec, PayloadCodec, ResourceFields,
    ResourceUpdateMsg,
};
use edgesync_types::{DeviceId, DeviceProfileId, PackageId, ProtocolVersion, TenantId};

const CUTOVER: ProtocolVersion = ProtocolVersion::STRUCTURED_ENTITY_MIN;

fn legacy_device_fields() -> DeviceFields {
    DeviceFields {
        name: "sensor1".into(),
        device_type: "thermostat".into(),
        label: Some("hallway".into()),
        device_profile_id: Some(DeviceProfileId::new()),
        customer_id: None,
        firmware_id: Some(PackageId::new()),
        software_id: None,
        device_data: Some(br#"{"transport":"mqtt"}"#.to_vec()),
        additional_info: Some(r#"{"gateway":true}"#.into()),
    }
}

// ── Device ──────────────────────────────────────────────────────

#[test]
fn legacy_device_reads_discrete_fields() {
    let fields = legacy_device_fields();
    let profile = fields.device_profile_id;
    let firmware = fields.firmware_id;
    let msg = DeviceUpdateMsg::legacy(fields);
    let tenant = TenantId::new();
    let device_id = DeviceId::new();

    let device = decode_device(
        &msg,
        tenant,
        device_id,
        ProtocolVersion::LEGACY,
        CUTOVER,
        &JsonPayloadCodec,
    )
    .unwrap();

    assert_eq!(device.tenant_id, tenant);
    assert_eq!(device.name, "sensor1");
    assert_eq!(device.device_type, "thermostat");
    assert_eq!(device.label.as_deref(), Some("hallway"));
    assert_eq!(device.device_profile_id, profile);
    assert_eq!(device.firmware_id, firmware);
    assert_eq!(device.software_id, None);
    assert_eq!(
        device.device_data,
        Some(serde_json::json!({"transport": "mqtt"}))
    );
    assert_eq!(
        device.additional_info,
        Some(serde_json::json!({"gateway": true}))
    );
}

#[test]
fn legacy_device_timestamp_comes_from_identity() {
    let msg = DeviceUpdateMsg::legacy(legacy_device_fields());
    let device_id = DeviceId::new();

    let device = decode_device(
        &msg,
        TenantId::new(),
        device_id,
        ProtocolVersion::LEGACY,
        CUTOVER,
        &JsonPayloadCodec,
    )
    .unwrap();

    assert_eq!(device.created_at, device_id.embedded_unix_millis().unwrap());
}

#[test]
fn legacy_device_optional_fields_stay_unset() {
    let msg = DeviceUpdateMsg::legacy(DeviceFields {
        name: "bare".into(),
        device_type: "sensor".into(),
        ..DeviceFields::default()
    });

    let device = decode_device(
        &msg,
        TenantId::new(),
        DeviceId::new(),
        ProtocolVersion::LEGACY,
        CUTOVER,
        &JsonPayloadCodec,
    )
    .unwrap();

    assert_eq!(device.label, None);
    assert_eq!(device.device_profile_id, None);
    assert_eq!(device.device_data, None);
    assert_eq!(device.additional_info, None);
}

#[test]
fn unrecognized_device_data_encoding_is_not_fatal() {
    let msg = DeviceUpdateMsg::legacy(DeviceFields {
        name: "sensor1".into(),
        device_type: "sensor".into(),
        device_data: Some(vec![0xde, 0xad, 0xbe, 0xef]),
        ..DeviceFields::default()
    });

    let device = decode_device(
        &msg,
        TenantId::new(),
        DeviceId::new(),
        ProtocolVersion::LEGACY,
        CUTOVER,
        &JsonPayloadCodec,
    )
    .unwrap();

    assert_eq!(device.device_data, None);
}

#[test]
fn bad_additional_info_is_fatal() {
    let msg = DeviceUpdateMsg::legacy(DeviceFields {
        name: "sensor1".into(),
        device_type: "sensor".into(),
        additional_info: Some("not json".into()),
        ..DeviceFields::default()
    });

    let err = decode_device(
        &msg,
        TenantId::new(),
        DeviceId::new(),
        ProtocolVersion::LEGACY,
        CUTOVER,
        &JsonPayloadCodec,
    )
    .unwrap_err();
    assert!(matches!(err, DecodeError::AdditionalInfo(_)));
}

#[test]
fn structured_device_decodes_directly() {
    let tenant = TenantId::new();
    let msg = DeviceUpdateMsg::structured(format!(
        r#"{{"tenant_id":"{tenant}","name":"sensor1","device_type":"sensor","created_at":1700000000000}}"#
    ));

    let device = decode_device(
        &msg,
        tenant,
        DeviceId::new(),
        ProtocolVersion::CURRENT,
        CUTOVER,
        &JsonPayloadCodec,
    )
    .unwrap();

    assert_eq!(device.name, "sensor1");
    assert_eq!(device.created_at, 1_700_000_000_000);
}

#[test]
fn structured_device_ignores_unknown_fields() {
    let tenant = TenantId::new();
    let msg = DeviceUpdateMsg::structured(format!(
        r#"{{"tenant_id":"{tenant}","name":"sensor1","device_type":"sensor","added_in_v9":[1,2,3]}}"#
    ));

    let device = decode_device(
        &msg,
        tenant,
        DeviceId::new(),
        ProtocolVersion::CURRENT,
        CUTOVER,
        &JsonPayloadCodec,
    )
    .unwrap();
    assert_eq!(device.name, "sensor1");
}

#[test]
fn structured_sender_without_entity_blob_fails() {
    let msg = DeviceUpdateMsg::legacy(legacy_device_fields());
    let err = decode_device(
        &msg,
        TenantId::new(),
        DeviceId::new(),
        ProtocolVersion::CURRENT,
        CUTOVER,
        &JsonPayloadCodec,
    )
    .unwrap_err();
    assert!(matches!(err, DecodeError::MissingRepresentation { .. }));
}

#[test]
fn legacy_sender_without_fields_fails() {
    let msg = DeviceUpdateMsg::structured("{}");
    let err = decode_device(
        &msg,
        TenantId::new(),
        DeviceId::new(),
        ProtocolVersion::LEGACY,
        CUTOVER,
        &JsonPayloadCodec,
    )
    .unwrap_err();
    assert!(matches!(err, DecodeError::MissingRepresentation { .. }));
}

#[test]
fn unparseable_entity_blob_fails() {
    let msg = DeviceUpdateMsg::structured("{{{");
    let err = decode_device(
        &msg,
        TenantId::new(),
        DeviceId::new(),
        ProtocolVersion::CURRENT,
        CUTOVER,
        &JsonPayloadCodec,
    )
    .unwrap_err();
    assert!(matches!(err, DecodeError::Entity(_)));
}

#[test]
fn custom_codec_is_honored() {
    struct FixedCodec;
    impl PayloadCodec for FixedCodec {
        fn decode(&self, _bytes: &[u8]) -> Option<serde_json::Value> {
            Some(serde_json::json!({"decoded": true}))
        }
    }

    let msg = DeviceUpdateMsg::legacy(DeviceFields {
        name: "sensor1".into(),
        device_type: "sensor".into(),
        device_data: Some(vec![1, 2, 3]),
        ..DeviceFields::default()
    });

    let device = decode_device(
        &msg,
        TenantId::new(),
        DeviceId::new(),
        ProtocolVersion::LEGACY,
        CUTOVER,
        &FixedCodec,
    )
    .unwrap();
    assert_eq!(device.device_data, Some(serde_json::json!({"decoded": true})));
}

// ── Resource ────────────────────────────────────────────────────

#[test]
fn legacy_resource_reads_discrete_fields() {
    let tenant = TenantId::new();
    let msg = ResourceUpdateMsg::legacy(ResourceFields {
        title: "model".into(),
        resource_type: "lwm2m_model".into(),
        resource_key: "3303.xml".into(),
        file_name: "3303.xml".into(),
        data: Some("PHhtbC8+".into()),
        etag: None,
        is_system: false,
    });

    let resource =
        decode_resource(&msg, tenant, ProtocolVersion::LEGACY, CUTOVER).unwrap();
    assert_eq!(resource.tenant_id, tenant);
    assert_eq!(resource.resource_key, "3303.xml");
    assert_eq!(resource.data.as_deref(), Some("PHhtbC8+"));
    assert_eq!(resource.etag, None);
}

#[test]
fn system_resource_takes_sentinel_tenant() {
    let msg = ResourceUpdateMsg::legacy(ResourceFields {
        title: "shared".into(),
        resource_type: "script".into(),
        resource_key: "common.js".into(),
        file_name: "common.js".into(),
        is_system: true,
        ..ResourceFields::default()
    });

    let resource =
        decode_resource(&msg, TenantId::new(), ProtocolVersion::LEGACY, CUTOVER).unwrap();
    assert!(resource.tenant_id.is_system());
}

#[test]
fn structured_resource_decodes_directly() {
    let tenant = TenantId::new();
    let msg = ResourceUpdateMsg::structured(format!(
        r#"{{"tenant_id":"{tenant}","title":"model","resource_type":"script","resource_key":"common.js","file_name":"common.js"}}"#
    ));

    let resource =
        decode_resource(&msg, tenant, ProtocolVersion::CURRENT, CUTOVER).unwrap();
    assert_eq!(resource.resource_key, "common.js");
    assert_eq!(resource.tenant_id, tenant);
}

// ── Credentials ─────────────────────────────────────────────────

#[test]
fn legacy_credentials_decode_as_detached_value() {
    let device_id = DeviceId::new();
    let msg = CredentialsUpdateMsg::legacy(CredentialsFields {
        device_id,
        credentials_type: CredentialsType::Basic,
        credentials_id: "user1".into(),
        credentials_value: Some("hunter2".into()),
    });

    let creds = decode_credentials(&msg, ProtocolVersion::LEGACY, CUTOVER).unwrap();
    assert_eq!(creds.id, None);
    assert_eq!(creds.device_id, device_id);
    assert_eq!(creds.credentials_type, CredentialsType::Basic);
    assert_eq!(creds.credentials_id, "user1");
    assert_eq!(creds.credentials_value.as_deref(), Some("hunter2"));
}

#[test]
fn legacy_credentials_value_is_optional() {
    let msg = CredentialsUpdateMsg::legacy(CredentialsFields {
        device_id: DeviceId::new(),
        credentials_type: CredentialsType::AccessToken,
        credentials_id: "tok".into(),
        credentials_value: None,
    });

    let creds = decode_credentials(&msg, ProtocolVersion::LEGACY, CUTOVER).unwrap();
    assert_eq!(creds.credentials_value, None);
}

#[test]
fn structured_credentials_decode_directly() {
    let device_id = DeviceId::new();
    let msg = CredentialsUpdateMsg::structured(format!(
        r#"{{"device_id":"{device_id}","credentials_type":"ACCESS_TOKEN","credentials_id":"tok20"}}"#
    ));

    let creds = decode_credentials(&msg, ProtocolVersion::CURRENT, CUTOVER).unwrap();
    assert_eq!(creds.device_id, device_id);
    assert_eq!(creds.credentials_id, "tok20");
}

// The decoded shape must match what the current protocol sends, so a
// full entity serialized by this node decodes unchanged.
#[test]
fn structured_device_roundtrips_through_model_serialization() {
    let mut device = Device::new(TenantId::new());
    device.name = "sensor1".into();
    device.device_type = "sensor".into();
    device.created_at = 42;
    let msg = DeviceUpdateMsg::structured(serde_json::to_string(&device).unwrap());

    let decoded = decode_device(
        &msg,
        device.tenant_id,
        DeviceId::new(),
        ProtocolVersion::CURRENT,
        CUTOVER,
        &JsonPayloadCodec,
    )
    .unwrap();
    assert_eq!(decoded, device);
}
