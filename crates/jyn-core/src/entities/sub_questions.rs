use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::progress::is_filled;

/// Display category grouping the answer-3 deep-dive questions.
///
/// Categories only drive progress display; they never affect transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SubQuestionCategory {
    EmotionsAndBody,
    BehaviorAndRelationships,
    PatternsAndHabits,
    CostsAndConsequences,
    DeeperInsight,
    LettingGoAndPeace,
}

impl SubQuestionCategory {
    pub const ALL: [Self; 6] = [
        Self::EmotionsAndBody,
        Self::BehaviorAndRelationships,
        Self::PatternsAndHabits,
        Self::CostsAndConsequences,
        Self::DeeperInsight,
        Self::LettingGoAndPeace,
    ];

    /// Slots belonging to this category, in display order.
    #[must_use]
    pub const fn slots(self) -> &'static [Answer3Slot] {
        use Answer3Slot as S;
        match self {
            Self::EmotionsAndBody => &[S::Emotions, S::BodyLocation],
            Self::BehaviorAndRelationships => {
                &[S::TreatOthers, S::TreatSelf, S::WhoseBusiness, S::Role]
            }
            Self::PatternsAndHabits => &[S::Habits, S::Images, S::ThoughtAge],
            Self::CostsAndConsequences => &[
                S::Cost,
                S::Inability,
                S::BenefitOfHolding,
                S::WholeLife,
                S::Missing,
            ],
            Self::DeeperInsight => &[
                S::StressOrPeace,
                S::OtherStressfulThoughts,
                S::PretendNotToKnow,
                S::HeartOpenClose,
            ],
            Self::LettingGoAndPeace => &[S::ReasonToLetGo, S::PeacefulReasonToHold],
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmotionsAndBody => "emotions_and_body",
            Self::BehaviorAndRelationships => "behavior_and_relationships",
            Self::PatternsAndHabits => "patterns_and_habits",
            Self::CostsAndConsequences => "costs_and_consequences",
            Self::DeeperInsight => "deeper_insight",
            Self::LettingGoAndPeace => "letting_go_and_peace",
        }
    }
}

impl fmt::Display for SubQuestionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the 20 named deep-dive slots of inquiry question 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Answer3Slot {
    Emotions,
    BodyLocation,
    TreatOthers,
    TreatSelf,
    WhoseBusiness,
    Role,
    Habits,
    Images,
    ThoughtAge,
    Cost,
    Inability,
    BenefitOfHolding,
    WholeLife,
    Missing,
    StressOrPeace,
    OtherStressfulThoughts,
    PretendNotToKnow,
    HeartOpenClose,
    ReasonToLetGo,
    PeacefulReasonToHold,
}

impl Answer3Slot {
    pub const ALL: [Self; 20] = [
        Self::Emotions,
        Self::BodyLocation,
        Self::TreatOthers,
        Self::TreatSelf,
        Self::WhoseBusiness,
        Self::Role,
        Self::Habits,
        Self::Images,
        Self::ThoughtAge,
        Self::Cost,
        Self::Inability,
        Self::BenefitOfHolding,
        Self::WholeLife,
        Self::Missing,
        Self::StressOrPeace,
        Self::OtherStressfulThoughts,
        Self::PretendNotToKnow,
        Self::HeartOpenClose,
        Self::ReasonToLetGo,
        Self::PeacefulReasonToHold,
    ];

    /// Persisted key of the slot.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Emotions => "emotions",
            Self::BodyLocation => "bodyLocation",
            Self::TreatOthers => "treatOthers",
            Self::TreatSelf => "treatSelf",
            Self::WhoseBusiness => "whoseBusiness",
            Self::Role => "role",
            Self::Habits => "habits",
            Self::Images => "images",
            Self::ThoughtAge => "thoughtAge",
            Self::Cost => "cost",
            Self::Inability => "inability",
            Self::BenefitOfHolding => "benefitOfHolding",
            Self::WholeLife => "wholeLife",
            Self::Missing => "missing",
            Self::StressOrPeace => "stressOrPeace",
            Self::OtherStressfulThoughts => "otherStressfulThoughts",
            Self::PretendNotToKnow => "pretendNotToKnow",
            Self::HeartOpenClose => "heartOpenClose",
            Self::ReasonToLetGo => "reasonToLetGo",
            Self::PeacefulReasonToHold => "peacefulReasonToHold",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.key() == key)
    }

    #[must_use]
    pub fn category(self) -> SubQuestionCategory {
        SubQuestionCategory::ALL
            .into_iter()
            .find(|category| category.slots().contains(&self))
            .unwrap_or(SubQuestionCategory::EmotionsAndBody)
    }
}

/// One of the 6 named deep-dive slots of inquiry question 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Answer4Slot {
    BreathFeeling,
    WhoNowMoment,
    WhoInSituation,
    LiveDifferently,
    WholeLife,
    BodyFeeling,
}

impl Answer4Slot {
    pub const ALL: [Self; 6] = [
        Self::BreathFeeling,
        Self::WhoNowMoment,
        Self::WhoInSituation,
        Self::LiveDifferently,
        Self::WholeLife,
        Self::BodyFeeling,
    ];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::BreathFeeling => "breathFeeling",
            Self::WhoNowMoment => "whoNowMoment",
            Self::WhoInSituation => "whoInSituation",
            Self::LiveDifferently => "liveDifferently",
            Self::WholeLife => "wholeLife",
            Self::BodyFeeling => "bodyFeeling",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.key() == key)
    }
}

/// Optional deep-dive answers for inquiry question 3.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Answer3SubQuestions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treat_others: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treat_self: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whose_business: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub habits: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thought_age: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inability: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benefit_of_holding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whole_life: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stress_or_peace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_stressful_thoughts: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pretend_not_to_know: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heart_open_close: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_to_let_go: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peaceful_reason_to_hold: Option<String>,
}

impl Answer3SubQuestions {
    const fn slot(&self, slot: Answer3Slot) -> &Option<String> {
        match slot {
            Answer3Slot::Emotions => &self.emotions,
            Answer3Slot::BodyLocation => &self.body_location,
            Answer3Slot::TreatOthers => &self.treat_others,
            Answer3Slot::TreatSelf => &self.treat_self,
            Answer3Slot::WhoseBusiness => &self.whose_business,
            Answer3Slot::Role => &self.role,
            Answer3Slot::Habits => &self.habits,
            Answer3Slot::Images => &self.images,
            Answer3Slot::ThoughtAge => &self.thought_age,
            Answer3Slot::Cost => &self.cost,
            Answer3Slot::Inability => &self.inability,
            Answer3Slot::BenefitOfHolding => &self.benefit_of_holding,
            Answer3Slot::WholeLife => &self.whole_life,
            Answer3Slot::Missing => &self.missing,
            Answer3Slot::StressOrPeace => &self.stress_or_peace,
            Answer3Slot::OtherStressfulThoughts => &self.other_stressful_thoughts,
            Answer3Slot::PretendNotToKnow => &self.pretend_not_to_know,
            Answer3Slot::HeartOpenClose => &self.heart_open_close,
            Answer3Slot::ReasonToLetGo => &self.reason_to_let_go,
            Answer3Slot::PeacefulReasonToHold => &self.peaceful_reason_to_hold,
        }
    }

    fn slot_mut(&mut self, slot: Answer3Slot) -> &mut Option<String> {
        match slot {
            Answer3Slot::Emotions => &mut self.emotions,
            Answer3Slot::BodyLocation => &mut self.body_location,
            Answer3Slot::TreatOthers => &mut self.treat_others,
            Answer3Slot::TreatSelf => &mut self.treat_self,
            Answer3Slot::WhoseBusiness => &mut self.whose_business,
            Answer3Slot::Role => &mut self.role,
            Answer3Slot::Habits => &mut self.habits,
            Answer3Slot::Images => &mut self.images,
            Answer3Slot::ThoughtAge => &mut self.thought_age,
            Answer3Slot::Cost => &mut self.cost,
            Answer3Slot::Inability => &mut self.inability,
            Answer3Slot::BenefitOfHolding => &mut self.benefit_of_holding,
            Answer3Slot::WholeLife => &mut self.whole_life,
            Answer3Slot::Missing => &mut self.missing,
            Answer3Slot::StressOrPeace => &mut self.stress_or_peace,
            Answer3Slot::OtherStressfulThoughts => &mut self.other_stressful_thoughts,
            Answer3Slot::PretendNotToKnow => &mut self.pretend_not_to_know,
            Answer3Slot::HeartOpenClose => &mut self.heart_open_close,
            Answer3Slot::ReasonToLetGo => &mut self.reason_to_let_go,
            Answer3Slot::PeacefulReasonToHold => &mut self.peaceful_reason_to_hold,
        }
    }

    #[must_use]
    pub fn get(&self, slot: Answer3Slot) -> Option<&str> {
        self.slot(slot).as_deref()
    }

    pub fn set(&mut self, slot: Answer3Slot, value: impl Into<String>) {
        *self.slot_mut(slot) = Some(value.into());
    }

    /// Number of slots with a non-blank answer.
    #[must_use]
    pub fn answered(&self) -> usize {
        Answer3Slot::ALL
            .into_iter()
            .filter(|slot| is_filled(self.get(*slot)))
            .count()
    }

    /// Number of non-blank slots within one category.
    #[must_use]
    pub fn answered_in(&self, category: SubQuestionCategory) -> usize {
        category
            .slots()
            .iter()
            .filter(|slot| is_filled(self.get(**slot)))
            .count()
    }
}

/// Optional deep-dive answers for inquiry question 4.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Answer4SubQuestions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breath_feeling: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub who_now_moment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub who_in_situation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_differently: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whole_life: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_feeling: Option<String>,
}

impl Answer4SubQuestions {
    #[must_use]
    pub fn get(&self, slot: Answer4Slot) -> Option<&str> {
        match slot {
            Answer4Slot::BreathFeeling => self.breath_feeling.as_deref(),
            Answer4Slot::WhoNowMoment => self.who_now_moment.as_deref(),
            Answer4Slot::WhoInSituation => self.who_in_situation.as_deref(),
            Answer4Slot::LiveDifferently => self.live_differently.as_deref(),
            Answer4Slot::WholeLife => self.whole_life.as_deref(),
            Answer4Slot::BodyFeeling => self.body_feeling.as_deref(),
        }
    }

    pub fn set(&mut self, slot: Answer4Slot, value: impl Into<String>) {
        let value = Some(value.into());
        match slot {
            Answer4Slot::BreathFeeling => self.breath_feeling = value,
            Answer4Slot::WhoNowMoment => self.who_now_moment = value,
            Answer4Slot::WhoInSituation => self.who_in_situation = value,
            Answer4Slot::LiveDifferently => self.live_differently = value,
            Answer4Slot::WholeLife => self.whole_life = value,
            Answer4Slot::BodyFeeling => self.body_feeling = value,
        }
    }

    #[must_use]
    pub fn answered(&self) -> usize {
        Answer4Slot::ALL
            .into_iter()
            .filter(|slot| is_filled(self.get(*slot)))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_slot_has_exactly_one_category() {
        let total: usize = SubQuestionCategory::ALL
            .iter()
            .map(|category| category.slots().len())
            .sum();
        assert_eq!(total, 20);
        assert_eq!(
            Answer3Slot::ThoughtAge.category(),
            SubQuestionCategory::PatternsAndHabits
        );
        assert_eq!(
            Answer3Slot::PeacefulReasonToHold.category(),
            SubQuestionCategory::LettingGoAndPeace
        );
    }

    #[test]
    fn keys_roundtrip() {
        for slot in Answer3Slot::ALL {
            assert_eq!(Answer3Slot::from_key(slot.key()), Some(slot));
        }
        for slot in Answer4Slot::ALL {
            assert_eq!(Answer4Slot::from_key(slot.key()), Some(slot));
        }
        assert_eq!(Answer3Slot::from_key("unknown"), None);
    }

    #[test]
    fn answered_counts_ignore_blank_values() {
        let mut sub = Answer3SubQuestions::default();
        sub.set(Answer3Slot::Emotions, "anger");
        sub.set(Answer3Slot::BodyLocation, "   ");
        sub.set(Answer3Slot::Cost, "sleep");
        assert_eq!(sub.answered(), 2);
        assert_eq!(sub.answered_in(SubQuestionCategory::EmotionsAndBody), 1);
        assert_eq!(sub.answered_in(SubQuestionCategory::CostsAndConsequences), 1);
        assert_eq!(sub.answered_in(SubQuestionCategory::DeeperInsight), 0);
    }

    #[test]
    fn serializes_camel_case_keys_and_skips_empty_slots() {
        let mut sub = Answer4SubQuestions::default();
        sub.set(Answer4Slot::WhoNowMoment, "calm");
        let json = serde_json::to_value(&sub).unwrap();
        assert_eq!(json, serde_json::json!({"whoNowMoment": "calm"}));
        assert_eq!(sub.answered(), 1);
    }
}
