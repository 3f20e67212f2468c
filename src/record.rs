//! Patient measurement records and their wire representation.
//!
//! A `VitalsRecord` captures one measurement event produced upstream. The
//! wire format is a single CSV line with a fixed field order; no escaping is
//! applied, so a `data` field may itself carry comma-separated sub-values.

use std::fmt;

/// One measurement event forwarded by a sink.
///
/// Records are ephemeral: sinks format and transmit (or drop) them and hold
/// no queue of unsent records.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VitalsRecord {
    /// Identifier of the patient the measurement belongs to.
    pub patient_id: u32,
    /// Producer-supplied timestamp in milliseconds since the epoch.
    /// Not validated; forwarded as given.
    pub timestamp_ms: i64,
    /// Short category label, e.g. `ECG` or `BloodPressure`.
    pub label: String,
    /// Measurement payload in string form.
    pub data: String,
}

impl VitalsRecord {
    /// Construct a record from its four fields.
    pub fn new(patient_id: u32, timestamp_ms: i64, label: &str, data: &str) -> Self {
        Self {
            patient_id,
            timestamp_ms,
            label: label.to_owned(),
            data: data.to_owned(),
        }
    }

    /// Render the record as its wire line, without the trailing newline.
    ///
    /// Field order is fixed: `patient_id,timestamp_ms,label,data`.
    pub fn to_line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for VitalsRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.patient_id, self.timestamp_ms, self.label, self.data
        )
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::VitalsRecord;

    #[rstest]
    #[case(1, 1000, "ECG", "0.5", "1,1000,ECG,0.5")]
    #[case(7, 123_456_789, "BloodPressure", "120/80", "7,123456789,BloodPressure,120/80")]
    #[case(0, 0, "Saturation", "", "0,0,Saturation,")]
    #[case(42, -1, "ECG", "raw", "42,-1,ECG,raw")]
    fn formats_fixed_field_order(
        #[case] patient_id: u32,
        #[case] timestamp_ms: i64,
        #[case] label: &str,
        #[case] data: &str,
        #[case] expected: &str,
    ) {
        let record = VitalsRecord::new(patient_id, timestamp_ms, label, data);
        assert_eq!(record.to_line(), expected);
    }

    #[rstest]
    fn data_field_commas_pass_through_unescaped() {
        let record = VitalsRecord::new(3, 5000, "ECG", "0.1,0.2,0.3");
        assert_eq!(record.to_line(), "3,5000,ECG,0.1,0.2,0.3");
    }
}
