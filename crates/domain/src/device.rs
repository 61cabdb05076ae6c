//! Device — a classroom appliance (light, heater, air conditioner) that the
//! user can switch on and off.

use serde::{Deserialize, Serialize};

use crate::id::DeviceId;

/// Power added to a tracked `power_usage` when a device is switched on.
pub const POWER_STEP_ON: f64 = 0.5;

/// Power removed from a tracked `power_usage` when a device is switched off.
pub const POWER_STEP_OFF: f64 = 0.3;

define_label!(
    /// Whether a device is currently running.
    DeviceStatus {
        On => "on",
        Off => "off",
    }
);

define_label!(
    /// What a device does.
    DeviceKind {
        Light => "light",
        Heating => "heating",
        Cooling => "cooling",
    }
);

/// A switchable device in the current room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub id: DeviceId,
    pub name: String,
    pub status: DeviceStatus,
    pub icon: String,
    /// Power draw in watts; `None` when the device does not report it.
    pub power_usage: Option<f64>,
    /// Set-point temperature; `None` when the device has none.
    pub temperature: Option<f64>,
    #[serde(rename = "type")]
    pub kind: DeviceKind,
}

impl Device {
    /// Flip the device between on and off and return the new status.
    ///
    /// A tracked power draw grows by [`POWER_STEP_ON`] when switched on and
    /// shrinks by [`POWER_STEP_OFF`] when switched off, never going below zero.
    pub fn toggle(&mut self) -> DeviceStatus {
        self.status = match self.status {
            DeviceStatus::Off => DeviceStatus::On,
            DeviceStatus::On => DeviceStatus::Off,
        };
        if let Some(power) = self.power_usage {
            self.power_usage = Some(match self.status {
                DeviceStatus::On => power + POWER_STEP_ON,
                DeviceStatus::Off => (power - POWER_STEP_OFF).max(0.0),
            });
        }
        self.status
    }
}

/// Sum the power draw of every device, counting untracked devices as zero.
#[must_use]
pub fn total_power_usage(devices: &[Device]) -> f64 {
    devices.iter().filter_map(|d| d.power_usage).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn light(status: DeviceStatus, power_usage: Option<f64>) -> Device {
        Device {
            id: DeviceId::new(2),
            name: "전등".to_string(),
            status,
            icon: "bulb".to_string(),
            power_usage,
            temperature: None,
            kind: DeviceKind::Light,
        }
    }

    #[test]
    fn should_turn_on_and_add_power_step() {
        let mut device = light(DeviceStatus::Off, Some(1.2));
        assert_eq!(device.toggle(), DeviceStatus::On);
        assert!((device.power_usage.unwrap() - 1.7).abs() < f64::EPSILON);
    }

    #[test]
    fn should_turn_off_and_remove_power_step() {
        let mut device = light(DeviceStatus::On, Some(1.0));
        assert_eq!(device.toggle(), DeviceStatus::Off);
        assert!((device.power_usage.unwrap() - 0.7).abs() < 1e-9);
    }

    #[test]
    fn should_clamp_power_at_zero_when_turning_off() {
        let mut device = light(DeviceStatus::On, Some(0.1));
        device.toggle();
        assert_eq!(device.power_usage, Some(0.0));
    }

    #[test]
    fn should_leave_untracked_power_alone() {
        let mut device = light(DeviceStatus::Off, None);
        device.toggle();
        assert_eq!(device.status, DeviceStatus::On);
        assert!(device.power_usage.is_none());
    }

    #[test]
    fn should_sum_power_treating_missing_as_zero() {
        let devices = vec![
            light(DeviceStatus::Off, None),
            light(DeviceStatus::On, Some(1.2)),
            light(DeviceStatus::On, Some(0.8)),
        ];
        assert!((total_power_usage(&devices) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn should_serialize_with_client_field_names() {
        let json = serde_json::to_value(light(DeviceStatus::Off, Some(1.2))).unwrap();
        assert_eq!(json["id"], "2");
        assert_eq!(json["powerUsage"], 1.2);
        assert_eq!(json["type"], "light");
        assert_eq!(json["status"], "off");
        assert!(json["temperature"].is_null());
    }

    #[test]
    fn should_parse_stored_labels() {
        assert_eq!("on".parse::<DeviceStatus>().unwrap(), DeviceStatus::On);
        assert_eq!("cooling".parse::<DeviceKind>().unwrap(), DeviceKind::Cooling);
        assert!("dimmed".parse::<DeviceStatus>().is_err());
    }
}
