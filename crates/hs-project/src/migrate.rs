//! Schema migration framework.

use crate::ProjectError;
use crate::schema::Study;

pub const LATEST_VERSION: u32 = 1;

pub fn migrate_to_latest(mut study: Study) -> Result<Study, ProjectError> {
    while study.version < LATEST_VERSION {
        study = migrate_one_version(study)?;
    }
    Ok(study)
}

fn migrate_one_version(study: Study) -> Result<Study, ProjectError> {
    match study.version {
        0 => migrate_v0_to_v1(study),
        v => Err(ProjectError::Migration {
            what: format!("No migration path from version {}", v),
        }),
    }
}

// v0 had no `validation` key; the serde default already yields permissive.
fn migrate_v0_to_v1(mut study: Study) -> Result<Study, ProjectError> {
    study.version = 1;
    Ok(study)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ValidationModeDef;

    #[test]
    fn v0_is_upgraded() {
        let study: Study = serde_yaml::from_str("version: 0\nname: old\n").unwrap();
        let migrated = migrate_to_latest(study).unwrap();
        assert_eq!(migrated.version, LATEST_VERSION);
        assert_eq!(migrated.validation, ValidationModeDef::Permissive);
    }

    #[test]
    fn latest_is_untouched() {
        let study: Study = serde_yaml::from_str("version: 1\nname: current\n").unwrap();
        assert_eq!(migrate_to_latest(study.clone()).unwrap(), study);
    }
}
