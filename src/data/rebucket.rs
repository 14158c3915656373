//! Lookup tables that collapse fine-grained categorical levels into groups.
//!
//! Tables are applied once while cleaning; levels not listed keep their
//! original value, except countries, which fall into `Other`.

const EMPLOYER_GROUPS: &[(&str, &str)] = &[
    ("Never-worked", "Unemployed"),
    ("Without-pay", "Unemployed"),
    ("Local-gov", "SL-gov"),
    ("State-gov", "SL-gov"),
    ("Self-emp-inc", "self-emp"),
    ("Self-emp-not-inc", "self-emp"),
];

const MARITAL_GROUPS: &[(&str, &str)] = &[
    ("Married-AF-spouse", "Married"),
    ("Married-civ-spouse", "Married"),
    ("Married-spouse-absent", "Married"),
    ("Divorced", "Not-Married"),
    ("Separated", "Not-Married"),
    ("Widowed", "Not-Married"),
];

const OCCUPATION_GROUPS: &[(&str, &str)] = &[
    ("Adm-clerical", "White-Collar"),
    ("Exec-managerial", "White-Collar"),
    ("Craft-repair", "Blue-Collar"),
    ("Farming-fishing", "Blue-Collar"),
    ("Handlers-cleaners", "Blue-Collar"),
    ("Machine-op-inspct", "Blue-Collar"),
    ("Transport-moving", "Blue-Collar"),
    ("Other-service", "Service"),
    ("Priv-house-serv", "Service"),
    ("Protective-serv", "Service"),
    ("Prof-specialty", "Professional"),
    ("Tech-support", "Professional"),
    ("Sales", "Sales"),
    ("Armed-Forces", "Military"),
];

const COUNTRY_REGIONS: &[(&str, &str)] = &[
    ("China", "Asia"),
    ("Hong", "Asia"),
    ("India", "Asia"),
    ("Iran", "Asia"),
    ("Cambodia", "Asia"),
    ("Japan", "Asia"),
    ("Laos", "Asia"),
    ("Philippines", "Asia"),
    ("Vietnam", "Asia"),
    ("Taiwan", "Asia"),
    ("Thailand", "Asia"),
    ("Canada", "North.America"),
    ("United-States", "North.America"),
    ("Puerto-Rico", "North.America"),
    ("England", "Europe"),
    ("France", "Europe"),
    ("Germany", "Europe"),
    ("Greece", "Europe"),
    ("Holand-Netherlands", "Europe"),
    ("Hungary", "Europe"),
    ("Ireland", "Europe"),
    ("Italy", "Europe"),
    ("Poland", "Europe"),
    ("Portugal", "Europe"),
    ("Scotland", "Europe"),
    ("Yugoslavia", "Europe"),
    ("Columbia", "Latin.and.South.America"),
    ("Cuba", "Latin.and.South.America"),
    ("Dominican-Republic", "Latin.and.South.America"),
    ("Ecuador", "Latin.and.South.America"),
    ("El-Salvador", "Latin.and.South.America"),
    ("Guatemala", "Latin.and.South.America"),
    ("Haiti", "Latin.and.South.America"),
    ("Honduras", "Latin.and.South.America"),
    ("Mexico", "Latin.and.South.America"),
    ("Nicaragua", "Latin.and.South.America"),
    ("Outlying-US(Guam-USVI-etc)", "Latin.and.South.America"),
    ("Peru", "Latin.and.South.America"),
    ("Jamaica", "Latin.and.South.America"),
    ("Trinadad&Tobago", "Latin.and.South.America"),
];

const OTHER_REGION: &str = "Other";

fn lookup<'a>(table: &'a [(&'a str, &'a str)], level: &str) -> Option<&'a str> {
    table
        .iter()
        .find(|(source, _)| *source == level)
        .map(|(_, group)| *group)
}

/// Employer type group (`Unemployed`, `SL-gov`, `self-emp` or unchanged).
pub fn employer_group(level: &str) -> String {
    lookup(EMPLOYER_GROUPS, level).unwrap_or(level).to_string()
}

/// Marital status group (`Married`, `Not-Married` or unchanged).
pub fn marital_group(level: &str) -> String {
    lookup(MARITAL_GROUPS, level).unwrap_or(level).to_string()
}

/// Occupation group.
pub fn occupation_group(level: &str) -> String {
    lookup(OCCUPATION_GROUPS, level).unwrap_or(level).to_string()
}

/// World region for a country of origin.
pub fn country_region(level: &str) -> String {
    lookup(COUNTRY_REGIONS, level)
        .unwrap_or(OTHER_REGION)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employer_levels_collapse() {
        assert_eq!(employer_group("Never-worked"), "Unemployed");
        assert_eq!(employer_group("Without-pay"), "Unemployed");
        assert_eq!(employer_group("State-gov"), "SL-gov");
        assert_eq!(employer_group("Local-gov"), "SL-gov");
        assert_eq!(employer_group("Self-emp-inc"), "self-emp");
        assert_eq!(employer_group("Private"), "Private");
        assert_eq!(employer_group("Federal-gov"), "Federal-gov");
    }

    #[test]
    fn marital_levels_collapse() {
        assert_eq!(marital_group("Married-civ-spouse"), "Married");
        assert_eq!(marital_group("Married-spouse-absent"), "Married");
        assert_eq!(marital_group("Widowed"), "Not-Married");
        assert_eq!(marital_group("Separated"), "Not-Married");
        assert_eq!(marital_group("Never-married"), "Never-married");
    }

    #[test]
    fn every_occupation_has_a_group() {
        for (source, group) in OCCUPATION_GROUPS {
            assert_eq!(occupation_group(source), *group);
        }
        assert_eq!(occupation_group("Sales"), "Sales");
    }

    #[test]
    fn countries_map_to_regions_with_other_fallback() {
        assert_eq!(country_region("United-States"), "North.America");
        assert_eq!(country_region("Mexico"), "Latin.and.South.America");
        assert_eq!(country_region("Holand-Netherlands"), "Europe");
        assert_eq!(country_region("Vietnam"), "Asia");
        assert_eq!(country_region("South"), "Other");
        assert_eq!(country_region("Atlantis"), "Other");
    }
}
