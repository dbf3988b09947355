//! Record types shared by the store, the filter engine, and the renderers.

use serde::{Deserialize, Serialize};

/// One advocate as served by the directory endpoint.
///
/// Immutable once loaded; the whole collection is replaced on reload. Phone
/// numbers are displayed but never used as keys, since the endpoint does not
/// guarantee them unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advocate {
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    #[serde(default)]
    pub specialties: Vec<String>,
    pub years_of_experience: u32,
    pub phone_number: u64,
}

/// Wire envelope of the directory endpoint: a single `data` array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvocatesResponse {
    pub data: Vec<Advocate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_wire_shape() {
        let body = r#"{
            "data": [
                {
                    "firstName": "John",
                    "lastName": "Doe",
                    "city": "New York",
                    "degree": "MD",
                    "specialties": ["Cardiology"],
                    "yearsOfExperience": 10,
                    "phoneNumber": 5551234
                }
            ]
        }"#;

        let response: AdvocatesResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.data.len(), 1);
        let advocate = &response.data[0];
        assert_eq!(advocate.first_name, "John");
        assert_eq!(advocate.last_name, "Doe");
        assert_eq!(advocate.city, "New York");
        assert_eq!(advocate.degree, "MD");
        assert_eq!(advocate.specialties, vec!["Cardiology".to_string()]);
        assert_eq!(advocate.years_of_experience, 10);
        assert_eq!(advocate.phone_number, 5551234);
    }

    #[test]
    fn test_decode_missing_specialties_defaults_empty() {
        let body = r#"{
            "firstName": "Ana",
            "lastName": "Reyes",
            "city": "Austin",
            "degree": "PhD",
            "yearsOfExperience": 3,
            "phoneNumber": 5550000
        }"#;

        let advocate: Advocate = serde_json::from_str(body).unwrap();
        assert!(advocate.specialties.is_empty());
    }

    #[test]
    fn test_encode_round_trips_field_names() {
        let advocate = Advocate {
            first_name: "Ana".into(),
            last_name: "Reyes".into(),
            city: "Austin".into(),
            degree: "PhD".into(),
            specialties: vec!["Nutrition".into()],
            years_of_experience: 3,
            phone_number: 5550000,
        };

        let json = serde_json::to_value(&advocate).unwrap();
        assert_eq!(json["firstName"], "Ana");
        assert_eq!(json["yearsOfExperience"], 3);
        assert_eq!(json["phoneNumber"], 5550000u64);
    }
}
