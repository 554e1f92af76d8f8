use crate::app::models::{NameVerdict, Occurrence, RuntimeCriteria};

pub struct OutputGenerator;

impl OutputGenerator {
    /// Plain mode: matched candidates only, one per line.
    pub fn generate_matches(verdicts: &[(String, NameVerdict)]) -> String {
        let mut output = String::new();

        for (name, verdict) in verdicts {
            if *verdict == NameVerdict::Matched {
                output.push_str(name);
                output.push('\n');
            }
        }

        output.trim_end().to_string()
    }

    /// Explain mode: the resolved criteria, then one annotated line per
    /// candidate in input order.
    pub fn generate_explain(
        criteria: &RuntimeCriteria,
        verdicts: &[(String, NameVerdict)],
    ) -> String {
        let mut output = String::new();
        output.push_str(&format!("query:      {}\n", criteria.query));
        output.push_str(&format!("parameters: {}\n\n", criteria.params));

        for (name, verdict) in verdicts {
            let line = match verdict {
                NameVerdict::Matched => format!("match     {name}"),
                NameVerdict::NoMatch => format!("no match  {name}"),
                NameVerdict::SkippedHidden => {
                    format!("hidden    {name}  (pass --show-hidden to include)")
                }
            };
            output.push_str(&line);
            output.push('\n');
        }

        output.trim_end().to_string()
    }

    /// Occurrence mode: `line:start-end` per hit, in text order.
    pub fn generate_occurrences(occurrences: &[Occurrence]) -> String {
        let mut output = String::new();

        for occ in occurrences {
            output.push_str(&format!("{}:{}-{}\n", occ.line, occ.start, occ.end));
        }

        output.trim_end().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::params::SearchParameters;

    fn verdicts() -> Vec<(String, NameVerdict)> {
        vec![
            ("report.pdf".to_string(), NameVerdict::Matched),
            (".env".to_string(), NameVerdict::SkippedHidden),
            ("notes.txt".to_string(), NameVerdict::NoMatch),
        ]
    }

    #[test]
    fn test_plain_output_lists_matches_only() {
        assert_eq!(OutputGenerator::generate_matches(&verdicts()), "report.pdf");
    }

    #[test]
    fn test_plain_output_is_empty_without_matches() {
        let verdicts = vec![("notes.txt".to_string(), NameVerdict::NoMatch)];
        assert_eq!(OutputGenerator::generate_matches(&verdicts), "");
    }

    #[test]
    fn test_explain_output_shows_criteria_and_verdicts() {
        let criteria = RuntimeCriteria {
            query: "report".to_string(),
            params: SearchParameters::ROOT,
            explain: true,
            in_file: None,
        };

        let expected = "\
query:      report
parameters: ROOT

match     report.pdf
hidden    .env  (pass --show-hidden to include)
no match  notes.txt";
        assert_eq!(
            OutputGenerator::generate_explain(&criteria, &verdicts()),
            expected
        );
    }

    #[test]
    fn test_occurrence_output_format() {
        let occurrences = vec![
            Occurrence {
                start: 4,
                end: 7,
                line: 2,
            },
            Occurrence {
                start: 14,
                end: 17,
                line: 3,
            },
        ];
        assert_eq!(
            OutputGenerator::generate_occurrences(&occurrences),
            "2:4-7\n3:14-17"
        );
    }
}
