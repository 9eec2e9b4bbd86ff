use serde::{Deserialize, Serialize};

/// A skeleton region as returned by `GET /partes`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Part {
    pub id: u64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
}

/// A bone as returned by `GET /partes/{id}/huesos`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Bone {
    pub id: u64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "parte_id")]
    pub part_id: u64,
}

/// Everything the page shows about one region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartData {
    pub name: String,
    pub description: String,
    pub bones: Vec<Bone>,
}

impl PartData {
    pub fn new(part: Part, bones: Vec<Bone>) -> Self {
        Self {
            name: part.name,
            description: part.description,
            bones,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_uses_api_field_names() {
        let parts: Vec<Part> = serde_json::from_str(
            r#"[{"id": 1, "nombre": "Cráneo", "descripcion": "Protege el encéfalo"}]"#,
        )
        .unwrap();
        assert_eq!(
            parts[0],
            Part {
                id: 1,
                name: "Cráneo".into(),
                description: "Protege el encéfalo".into(),
            }
        );
    }

    #[test]
    fn test_bone_uses_api_field_names() {
        let bone: Bone = serde_json::from_str(
            r#"{"id": 7, "nombre": "Frontal", "descripcion": "Forma la frente", "parte_id": 1}"#,
        )
        .unwrap();
        assert_eq!(bone.part_id, 1);
        assert_eq!(bone.name, "Frontal");

        let value = serde_json::to_value(&bone).unwrap();
        assert_eq!(value["parte_id"], 1);
        assert_eq!(value["descripcion"], "Forma la frente");
    }
}
