use crate::analysis::Patent;
use crate::io::{error::Error, record::PatentRecord};
use std::io::Read;

pub fn read<R: Read>(reader: R) -> Result<Patent, Error> {
    let record: PatentRecord = serde_json::from_reader(reader)?;
    tracing::debug!(
        patent = %record.number,
        claims = record.claims.len(),
        structures = record.markush_structures.len(),
        "patent document parsed"
    );
    Patent::try_from(record)
}

pub fn from_str(s: &str) -> Result<Patent, Error> {
    let record: PatentRecord = serde_json::from_str(s)?;
    Patent::try_from(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::error::ValidationError;
    use crate::model::types::PatentStatus;

    const DOC: &str = r#"{
        "number": "US9999999B2",
        "status": "granted",
        "claims": [
            { "number": 1, "text": "A compound of formula (I).", "type": "independent" },
            { "number": 2, "text": "The compound of claim 1, wherein R1 is methyl.",
              "type": "dependent", "depends_on": [1] }
        ],
        "markush_structures": [
            { "id": "MK-1", "name": "formula (I)", "core_scaffold": "c1ccccc1[R1]",
              "claim_number": 1,
              "positions": [
                  { "symbol": "R1", "substituents": [
                      { "id": "me", "class": "alkyl", "name": "methyl", "fragment": "C" },
                      { "id": "cl", "class": "halogen", "name": "chloro", "fragment": "Cl" }
                  ] }
              ],
              "total_combinations": 999 }
        ]
    }"#;

    #[test]
    fn reads_minimal_document() {
        let patent = read(DOC.as_bytes()).unwrap();
        assert_eq!(patent.number(), "US9999999B2");
        assert_eq!(patent.status(), PatentStatus::Granted);
        assert_eq!(patent.claims().len(), 2);
        assert_eq!(patent.claims().get(2).unwrap().depends_on(), &[1]);
    }

    #[test]
    fn stored_combination_count_is_recomputed() {
        let patent = from_str(DOC).unwrap();
        assert_eq!(patent.structure("MK-1").unwrap().total_combinations(), 2);
    }

    #[test]
    fn syntax_error_reports_position() {
        let err = from_str("{\n  \"number\": }").unwrap_err();
        match err {
            Error::Parse { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unknown_enum_value_is_a_parse_error() {
        let doc = DOC.replace("\"granted\"", "\"pending\"");
        assert!(matches!(from_str(&doc), Err(Error::Parse { .. })));
    }

    #[test]
    fn forward_reference_is_rejected_after_parsing() {
        let doc = DOC.replace("\"depends_on\": [1]", "\"depends_on\": [3]");
        let err = from_str(&doc).unwrap_err();
        assert!(matches!(
            err,
            Error::Invalid {
                source: ValidationError::ForwardReference { claim: 2, target: 3 },
                ..
            }
        ));
    }
}
