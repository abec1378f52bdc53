use serde::{Deserialize, Serialize};

/// General controller settings as exchanged with `GET`/`POST /api/settings`.
///
/// The core holds the document for the settings form and posts it back as a
/// whole on save; individual members are edited by the shell. Every section
/// may be absent on older controller builds and reads as its default.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GeneralSettings {
    #[serde(default)]
    pub appearance: AppearanceSettings,
    #[serde(default)]
    pub printer: PrinterSettings,
    #[serde(default)]
    pub feature: FeatureSettings,
    #[serde(default)]
    pub folder: FolderSettings,
    #[serde(default)]
    pub serial: SerialSettings,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AppearanceSettings {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub color: String,
}

/// Axis speeds in mm/min and bed dimensions in mm
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PrinterSettings {
    #[serde(default)]
    pub movement_speed_x: u32,
    #[serde(default)]
    pub movement_speed_y: u32,
    #[serde(default)]
    pub movement_speed_z: u32,
    #[serde(default)]
    pub movement_speed_e: u32,
    #[serde(default)]
    pub bed_dimension_x: u32,
    #[serde(default)]
    pub bed_dimension_y: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FeatureSettings {
    #[serde(default)]
    pub sd_support: bool,
    #[serde(default)]
    pub temperature_graph: bool,
    #[serde(default)]
    pub wait_for_start_on_connect: bool,
    #[serde(default)]
    pub always_send_checksum: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FolderSettings {
    #[serde(default)]
    pub uploads: String,
    #[serde(default)]
    pub timelapse: String,
    #[serde(default)]
    pub logs: String,
}

/// Serial link configuration; timeouts are in seconds
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SerialSettings {
    #[serde(default)]
    pub port: String,
    #[serde(default)]
    pub baudrate: u32,
    #[serde(default)]
    pub timeout_connection: u32,
    #[serde(default)]
    pub timeout_detection: u32,
    #[serde(default)]
    pub timeout_communication: u32,
}
