use chrono::{Local, NaiveDate};
use rand::{seq::SliceRandom, Rng};
use thiserror::Error;

use crate::models::domain::{ExamConfiguration, GeneratedExam, Question, TopicFilter};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssemblyError {
    #[error("Question bank only has {available} matching questions, {requested} requested")]
    InsufficientPool { available: usize, requested: usize },

    #[error(
        "Not enough questions for the requested ratio: \
         multiple-choice {mc_available}/{mc_target}, essay {essay_available}/{essay_target}"
    )]
    InsufficientTypeRatio {
        mc_available: usize,
        mc_target: usize,
        essay_available: usize,
        essay_target: usize,
    },
}

/// Number of multiple-choice and essay questions an exam needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeTargets {
    pub multiple_choice: usize,
    pub essay: usize,
}

/// Splits `num_questions` by `mc_ratio` percent, rounding the multiple-choice
/// share half-up. The essay share is the remainder so both always sum to
/// `num_questions`. Ratios above 100 are treated as 100.
pub fn split_targets(num_questions: usize, mc_ratio: u8) -> TypeTargets {
    let ratio = usize::from(mc_ratio.min(100));
    let multiple_choice = (num_questions * ratio + 50) / 100;

    TypeTargets {
        multiple_choice,
        essay: num_questions - multiple_choice,
    }
}

/// Grade filter followed by the soft topic filter.
///
/// The topic only narrows the pool when at least one question of the grade
/// carries it; otherwise every question of the grade stays in the pool.
pub fn filter_pool<'a>(pool: &'a [Question], config: &ExamConfiguration) -> Vec<&'a Question> {
    let by_grade: Vec<&Question> = pool.iter().filter(|q| q.grade == config.grade).collect();

    if let TopicFilter::Topic(topic) = &config.topic {
        let by_topic: Vec<&Question> = by_grade
            .iter()
            .copied()
            .filter(|q| config.topic.matches(&q.topic))
            .collect();

        if !by_topic.is_empty() {
            return by_topic;
        }
        log::debug!(
            "No grade {} questions tagged '{}', keeping the whole grade pool",
            config.grade,
            topic
        );
    }

    by_grade
}

/// Vietnamese short date, e.g. `18/10/2026`.
pub fn format_exam_date(date: NaiveDate) -> String {
    date.format("%-d/%-m/%Y").to_string()
}

/// Assembles an exam from a snapshot of the bank using thread-local entropy
/// and today's local date.
pub fn assemble(pool: &[Question], config: &ExamConfiguration) -> Result<GeneratedExam, AssemblyError> {
    assemble_with(pool, config, &mut rand::rng(), Local::now().date_naive())
}

pub fn assemble_with<R: Rng + ?Sized>(
    pool: &[Question],
    config: &ExamConfiguration,
    rng: &mut R,
    date: NaiveDate,
) -> Result<GeneratedExam, AssemblyError> {
    let filtered = filter_pool(pool, config);

    if filtered.len() < config.num_questions {
        return Err(AssemblyError::InsufficientPool {
            available: filtered.len(),
            requested: config.num_questions,
        });
    }

    let targets = split_targets(config.num_questions, config.mc_ratio);

    let (mut mc_pool, mut essay_pool): (Vec<&Question>, Vec<&Question>) =
        filtered.into_iter().partition(|q| q.is_multiple_choice());

    if mc_pool.len() < targets.multiple_choice || essay_pool.len() < targets.essay {
        return Err(AssemblyError::InsufficientTypeRatio {
            mc_available: mc_pool.len(),
            mc_target: targets.multiple_choice,
            essay_available: essay_pool.len(),
            essay_target: targets.essay,
        });
    }

    mc_pool.shuffle(rng);
    essay_pool.shuffle(rng);

    let questions: Vec<Question> = mc_pool
        .into_iter()
        .take(targets.multiple_choice)
        .chain(essay_pool.into_iter().take(targets.essay))
        .cloned()
        .collect();

    log::info!(
        "Assembled exam '{}' for grade {}: {} multiple-choice, {} essay",
        config.title,
        config.grade,
        targets.multiple_choice,
        targets.essay
    );

    Ok(GeneratedExam {
        config: config.clone(),
        questions,
        date: format_exam_date(date),
    })
}
