use sqlx::FromRow;

use crate::error::ValidationError;

/// Separator placed between selected contents in the stored `contents` column.
pub const CONTENTS_DELIMITER: &str = " | ";

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ClassRecord {
    pub id: i64,
    pub day: i64,
    pub month: i64,
    pub class_number: i64,
    pub unit_number: i64,
    pub class_character: String,
    pub contents: String,
    pub activities: String,
    pub observations: String,
}

impl ClassRecord {
    /// Splits the stored contents back into the selected topics.
    pub fn content_items(&self) -> impl Iterator<Item = &str> {
        self.contents
            .split(CONTENTS_DELIMITER)
            .filter(|item| !item.is_empty())
    }
}

/// A record that passed validation and is ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClassRecord {
    pub day: i64,
    pub month: i64,
    pub class_number: i64,
    pub unit_number: i64,
    pub class_character: String,
    pub contents: String,
    pub activities: String,
    pub observations: String,
}

impl NewClassRecord {
    pub fn into_record(self, id: i64) -> ClassRecord {
        ClassRecord {
            id,
            day: self.day,
            month: self.month,
            class_number: self.class_number,
            unit_number: self.unit_number,
            class_character: self.class_character,
            contents: self.contents,
            activities: self.activities,
            observations: self.observations,
        }
    }
}

/// Raw values as submitted by the entry form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassRecordForm {
    pub day: String,
    pub month: String,
    pub class_number: String,
    pub unit_number: String,
    pub class_character: String,
    pub contents: Vec<String>,
    pub activities: String,
    pub observations: String,
}

impl ClassRecordForm {
    /// Collects the url-encoded pairs of a form post. `contenidos` may repeat and keeps its order.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut form = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "dia" => form.day = value,
                "mes" => form.month = value,
                "clase_nro" => form.class_number = value,
                "unidad_nro" => form.unit_number = value,
                "caracter_clase" => form.class_character = value,
                "contenidos" | "contenidos[]" => form.contents.push(value),
                "actividades" => form.activities = value,
                "observaciones" => form.observations = value,
                _ => {}
            }
        }
        form
    }

    pub fn validate(self) -> Result<NewClassRecord, ValidationError> {
        let required = [
            &self.day,
            &self.month,
            &self.class_number,
            &self.unit_number,
            &self.class_character,
        ];
        if required.iter().any(|value| value.trim().is_empty()) {
            return Err(ValidationError::MissingField);
        }

        let selected: Vec<String> = self
            .contents
            .into_iter()
            .filter(|item| !item.is_empty())
            .collect();
        if selected.is_empty() {
            return Err(ValidationError::NoContentSelected);
        }

        Ok(NewClassRecord {
            day: parse_number(&self.day)?,
            month: parse_number(&self.month)?,
            class_number: parse_number(&self.class_number)?,
            unit_number: parse_number(&self.unit_number)?,
            class_character: self.class_character,
            contents: selected.join(CONTENTS_DELIMITER),
            activities: self.activities,
            observations: self.observations,
        })
    }
}

fn parse_number(raw: &str) -> Result<i64, ValidationError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::NonNumericField)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ClassRecordForm {
        ClassRecordForm {
            day: "05".to_string(),
            month: "03".to_string(),
            class_number: "12".to_string(),
            unit_number: "1".to_string(),
            class_character: "theory".to_string(),
            contents: vec!["Concepto de algoritmo".to_string()],
            activities: "lecture".to_string(),
            observations: String::new(),
        }
    }

    #[test]
    fn test_from_pairs_keeps_content_order() {
        let pairs = vec![
            ("dia".to_string(), "5".to_string()),
            ("contenidos".to_string(), "B".to_string()),
            ("contenidos[]".to_string(), "A".to_string()),
            ("unknown".to_string(), "ignored".to_string()),
            ("contenidos".to_string(), "C".to_string()),
        ];
        let form = ClassRecordForm::from_pairs(pairs);

        assert_eq!(form.day, "5");
        assert_eq!(form.contents, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_validate_joins_contents() {
        let mut form = valid_form();
        form.contents.push("Variables, registros".to_string());

        let record = form.validate().expect("Failed to validate form");
        assert_eq!(record.day, 5);
        assert_eq!(record.month, 3);
        assert_eq!(record.contents, "Concepto de algoritmo | Variables, registros");
    }

    #[test]
    fn test_validate_missing_field() {
        for blank in 0..5 {
            let mut form = valid_form();
            let field = match blank {
                0 => &mut form.day,
                1 => &mut form.month,
                2 => &mut form.class_number,
                3 => &mut form.unit_number,
                _ => &mut form.class_character,
            };
            field.clear();
            assert_eq!(form.validate(), Err(ValidationError::MissingField));
        }
    }

    #[test]
    fn test_missing_field_is_reported_before_contents() {
        let mut form = valid_form();
        form.day.clear();
        form.contents.clear();
        assert_eq!(form.validate(), Err(ValidationError::MissingField));
    }

    #[test]
    fn test_validate_no_content() {
        let mut form = valid_form();
        form.contents = vec![String::new()];
        assert_eq!(form.validate(), Err(ValidationError::NoContentSelected));
    }

    #[test]
    fn test_no_content_is_reported_before_numbers() {
        let mut form = valid_form();
        form.month = "march".to_string();
        form.contents.clear();
        assert_eq!(form.validate(), Err(ValidationError::NoContentSelected));
    }

    #[test]
    fn test_validate_non_numeric() {
        for bad in 0..4 {
            let mut form = valid_form();
            let field = match bad {
                0 => &mut form.day,
                1 => &mut form.month,
                2 => &mut form.class_number,
                _ => &mut form.unit_number,
            };
            *field = "one".to_string();
            assert_eq!(form.validate(), Err(ValidationError::NonNumericField));
        }
    }

    #[test]
    fn test_numbers_are_not_range_checked() {
        let mut form = valid_form();
        form.day = " 45 ".to_string();
        form.month = "0".to_string();

        let record = form.validate().expect("Failed to validate form");
        assert_eq!(record.day, 45);
        assert_eq!(record.month, 0);
    }

    #[test]
    fn test_content_items_split() {
        let record = valid_form()
            .validate()
            .expect("Failed to validate form")
            .into_record(1);
        assert_eq!(record.content_items().collect::<Vec<_>>(), vec!["Concepto de algoritmo"]);
    }
}
