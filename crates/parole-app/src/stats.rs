use std::fmt;

use parole_types::{Level, QuestionRecord, QuestionType};

/// Question counts per type and level
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorpusStats {
    counts: [[usize; Level::ALL.len()]; QuestionType::ALL.len()],
}

impl CorpusStats {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a QuestionRecord>,
    {
        let mut stats = Self::default();
        for record in records {
            stats.counts[type_index(record.question_type)][level_index(record.level)] += 1;
        }
        stats
    }

    pub fn count(&self, question_type: QuestionType, level: Level) -> usize {
        self.counts[type_index(question_type)][level_index(level)]
    }

    pub fn type_total(&self, question_type: QuestionType) -> usize {
        self.counts[type_index(question_type)].iter().sum()
    }

    pub fn level_total(&self, level: Level) -> usize {
        self.counts.iter().map(|row| row[level_index(level)]).sum()
    }

    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }
}

impl fmt::Display for CorpusStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<10}", "Type/Level")?;
        for level in Level::ALL {
            write!(f, "{:>6}", level.as_str())?;
        }
        writeln!(f, "{:>7}", "Total")?;

        for question_type in QuestionType::ALL {
            write!(f, "{:<10}", question_type.as_str())?;
            for level in Level::ALL {
                write!(f, "{:>6}", self.count(question_type, level))?;
            }
            writeln!(f, "{:>7}", self.type_total(question_type))?;
        }

        write!(f, "{:<10}", "Total")?;
        for level in Level::ALL {
            write!(f, "{:>6}", self.level_total(level))?;
        }
        write!(f, "{:>7}", self.total())
    }
}

fn type_index(question_type: QuestionType) -> usize {
    match question_type {
        QuestionType::CE => 0,
        QuestionType::CO => 1,
        QuestionType::EE => 2,
        QuestionType::EO => 3,
    }
}

fn level_index(level: Level) -> usize {
    match level {
        Level::A1 => 0,
        Level::A2 => 1,
        Level::B1 => 2,
        Level::B2 => 3,
        Level::C1 => 4,
        Level::C2 => 5,
    }
}
