// Vehicle domain model
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureSensor {
    pub position: String,
    pub sensor_id: String,
}

impl TemperatureSensor {
    pub fn new(position: String, sensor_id: String) -> Self {
        Self {
            position,
            sensor_id,
        }
    }

    /// Legend label used for this sensor's line on a trip chart
    pub fn label(&self) -> String {
        format!("{} sensor", self.position)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssignedDriver {
    pub id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VehicleInfo {
    pub id: String,
    pub vin: String,
    pub assigned_driver: Option<AssignedDriver>,
    pub temperature_sensors: Vec<TemperatureSensor>,
}

impl VehicleInfo {
    pub fn new(
        id: String,
        vin: String,
        assigned_driver: Option<AssignedDriver>,
        temperature_sensors: Vec<TemperatureSensor>,
    ) -> Self {
        Self {
            id,
            vin,
            assigned_driver,
            temperature_sensors,
        }
    }
}

fn or_none(value: Option<&str>) -> &str {
    value.unwrap_or("None")
}

impl fmt::Display for VehicleInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let driver = self.assigned_driver.clone().unwrap_or_default();
        writeln!(f, "Vehicle ID: {}", self.id)?;
        writeln!(f, "VIN: {}", self.vin)?;
        writeln!(f, "Assigned Driver ID: {}", or_none(driver.id.as_deref()))?;
        writeln!(f, "Assigned Driver Name: {}", or_none(driver.name.as_deref()))?;
        write!(f, "Temperature Sensors:")?;
        for sensor in &self.temperature_sensors {
            write!(
                f,
                "\nPosition: {}, Sensor ID: {}",
                sensor.position, sensor.sensor_id
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensor_label() {
        let sensor = TemperatureSensor::new("front".to_string(), "212014918".to_string());
        assert_eq!(sensor.label(), "front sensor");
    }

    #[test]
    fn test_display_lists_driver_and_sensors() {
        let vehicle = VehicleInfo::new(
            "281474977075805".to_string(),
            "1FUJA6CK14LM94383".to_string(),
            Some(AssignedDriver {
                id: Some("88668".to_string()),
                name: Some("Susan Bob".to_string()),
            }),
            vec![
                TemperatureSensor::new("front".to_string(), "1".to_string()),
                TemperatureSensor::new("rear".to_string(), "2".to_string()),
            ],
        );

        let text = vehicle.to_string();
        assert!(text.contains("VIN: 1FUJA6CK14LM94383"));
        assert!(text.contains("Assigned Driver Name: Susan Bob"));
        assert!(text.ends_with("Position: rear, Sensor ID: 2"));
    }

    #[test]
    fn test_display_without_driver() {
        let vehicle = VehicleInfo::new("1".to_string(), String::new(), None, Vec::new());
        let text = vehicle.to_string();
        assert!(text.contains("Assigned Driver ID: None"));
        assert!(text.ends_with("Temperature Sensors:"));
    }
}
