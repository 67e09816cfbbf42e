use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::meal_plan::errors::MealPlanError;
use crate::domain::recipe::model::Recipe;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Day::Monday => write!(f, "Monday"),
            Day::Tuesday => write!(f, "Tuesday"),
            Day::Wednesday => write!(f, "Wednesday"),
            Day::Thursday => write!(f, "Thursday"),
            Day::Friday => write!(f, "Friday"),
            Day::Saturday => write!(f, "Saturday"),
            Day::Sunday => write!(f, "Sunday"),
        }
    }
}

impl FromStr for Day {
    type Err = MealPlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "monday" => Ok(Day::Monday),
            "tuesday" => Ok(Day::Tuesday),
            "wednesday" => Ok(Day::Wednesday),
            "thursday" => Ok(Day::Thursday),
            "friday" => Ok(Day::Friday),
            "saturday" => Ok(Day::Saturday),
            "sunday" => Ok(Day::Sunday),
            _ => Err(MealPlanError::InvalidDay),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MealType::Breakfast => write!(f, "breakfast"),
            MealType::Lunch => write!(f, "lunch"),
            MealType::Dinner => write!(f, "dinner"),
        }
    }
}

impl FromStr for MealType {
    type Err = MealPlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "breakfast" => Ok(MealType::Breakfast),
            "lunch" => Ok(MealType::Lunch),
            "dinner" => Ok(MealType::Dinner),
            _ => Err(MealPlanError::InvalidMealType),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakfast: Option<Recipe>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lunch: Option<Recipe>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dinner: Option<Recipe>,
}

impl DayPlan {
    pub fn meal(&self, meal_type: MealType) -> Option<&Recipe> {
        self.slot(meal_type).as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.breakfast.is_none() && self.lunch.is_none() && self.dinner.is_none()
    }

    fn slot(&self, meal_type: MealType) -> &Option<Recipe> {
        match meal_type {
            MealType::Breakfast => &self.breakfast,
            MealType::Lunch => &self.lunch,
            MealType::Dinner => &self.dinner,
        }
    }

    fn slot_mut(&mut self, meal_type: MealType) -> &mut Option<Recipe> {
        match meal_type {
            MealType::Breakfast => &mut self.breakfast,
            MealType::Lunch => &mut self.lunch,
            MealType::Dinner => &mut self.dinner,
        }
    }
}

/// Weekly plan keyed by day, persisted under `MEAL_PLAN` in the same shape
/// the browser client wrote (`{"Monday": {"lunch": {...}}}`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MealPlan {
    days: BTreeMap<Day, DayPlan>,
}

impl MealPlan {
    pub fn day(&self, day: Day) -> Option<&DayPlan> {
        self.days.get(&day)
    }

    pub fn days(&self) -> impl Iterator<Item = (Day, &DayPlan)> {
        self.days.iter().map(|(day, plan)| (*day, plan))
    }

    pub fn meal(&self, day: Day, meal_type: MealType) -> Option<&Recipe> {
        self.day(day).and_then(|plan| plan.meal(meal_type))
    }

    pub fn assign(&mut self, day: Day, meal_type: MealType, recipe: Recipe) {
        *self.days.entry(day).or_default().slot_mut(meal_type) = Some(recipe);
    }

    /// Returns the recipe that occupied the slot. Days left without meals are dropped.
    pub fn clear(&mut self, day: Day, meal_type: MealType) -> Option<Recipe> {
        let plan = self.days.get_mut(&day)?;
        let removed = plan.slot_mut(meal_type).take();
        if plan.is_empty() {
            self.days.remove(&day);
        }
        removed
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
