//! Selection state machine.

use super::{Effects, Focus, LevelEntry, LevelRow, SelectionContext, SelectionEffect, SelectionMode};
use crate::config::MagicConfig;
use crate::env::SkillOracle;
use crate::spell::{Coordinate, CoordinateResolver, SpellLevel, SpellType};
use crate::state::{ActorId, LearnableSkillHolder, LedgerHolder, SkillId, SkillRef, SkillTypeId};

/// Per-screen selection state. Dropped when the host leaves the screen.
#[derive(Clone, Debug)]
pub struct SelectionMachine<'a> {
    resolver: CoordinateResolver<'a>,
    context: SelectionContext,
    mode: SelectionMode,
    focus: Focus,
    actor: Option<ActorId>,
    category: Option<SkillTypeId>,
    level: SpellLevel,
}

impl<'a> SelectionMachine<'a> {
    pub fn new(config: &'a MagicConfig, context: SelectionContext) -> Self {
        Self {
            resolver: CoordinateResolver::new(config),
            context,
            mode: SelectionMode::Normal,
            focus: Focus::Category,
            actor: None,
            category: None,
            level: SpellLevel::FIRST,
        }
    }

    pub fn context(&self) -> SelectionContext {
        self.context
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn actor(&self) -> Option<ActorId> {
        self.actor
    }

    pub fn category(&self) -> Option<SkillTypeId> {
        self.category
    }

    pub fn level(&self) -> SpellLevel {
        self.level
    }

    /// Family of the open category, if it is managed.
    pub fn spell_type(&self) -> Option<SpellType> {
        self.resolver.type_of(self.category?)
    }

    /// Coordinate under the level cursor while in count selection.
    pub fn coordinate(&self) -> Option<Coordinate> {
        match self.mode {
            SelectionMode::CountSelect => Some(Coordinate::new(self.spell_type()?, self.level)),
            SelectionMode::Normal => None,
        }
    }

    /// Switches the acting character and returns to the category list.
    pub fn set_actor(&mut self, actor: ActorId) -> Effects {
        self.actor = Some(actor);
        self.reset();
        let mut effects = Effects::new();
        effects.push(SelectionEffect::HideLevelRow);
        effects.push(SelectionEffect::Focus(Focus::Category));
        effects
    }

    /// A category was picked from the category list.
    pub fn on_select_category<H>(&mut self, holder: &H, category: SkillTypeId) -> Effects
    where
        H: LedgerHolder + ?Sized,
    {
        let mut effects = Effects::new();
        if self.focus != Focus::Category {
            return effects;
        }
        self.category = Some(category);
        self.level = SpellLevel::FIRST;

        let Some(row) = self.level_row(holder) else {
            self.enter(SelectionMode::Normal, Focus::SkillList);
            effects.push(SelectionEffect::ShowDefaultSkillList);
            if self.context == SelectionContext::Battle {
                effects.push(SelectionEffect::ShowSkillList);
            }
            effects.push(SelectionEffect::Focus(Focus::SkillList));
            return effects;
        };

        self.enter(SelectionMode::CountSelect, Focus::LevelSelector);
        effects.push(SelectionEffect::ScopeSkillList(self.level));
        if self.context == SelectionContext::Battle {
            effects.push(SelectionEffect::ShowSkillList);
            effects.push(SelectionEffect::DeselectSkillList);
            effects.push(SelectionEffect::ClearHelp);
        }
        effects.push(SelectionEffect::ShowLevelRow(row));
        effects.push(SelectionEffect::HighlightLevel(self.level));
        effects.push(SelectionEffect::Focus(Focus::LevelSelector));
        effects
    }

    /// The level cursor moved. Out-of-range levels are ignored.
    pub fn on_move_level(&mut self, level: SpellLevel) -> Effects {
        let mut effects = Effects::new();
        if !self.at_level_selector() || level == self.level {
            return effects;
        }
        if !(1..=self.resolver.config().max_level).contains(&level.0) {
            return effects;
        }
        self.level = level;
        effects.push(SelectionEffect::HighlightLevel(level));
        effects.push(SelectionEffect::ScopeSkillList(level));
        effects
    }

    /// The level under the cursor was confirmed.
    ///
    /// A level with no uses left is rejected with [`SelectionEffect::Buzzer`]
    /// and the state does not change.
    pub fn on_confirm_level<H>(&mut self, holder: &H) -> Effects
    where
        H: LedgerHolder + ?Sized,
    {
        let mut effects = Effects::new();
        if !self.at_level_selector() {
            return effects;
        }
        let available = self
            .coordinate()
            .is_some_and(|coordinate| holder.ledger().can_afford(coordinate));
        if !available {
            effects.push(SelectionEffect::Buzzer);
            return effects;
        }
        self.focus = Focus::SkillList;
        effects.push(SelectionEffect::HideLevelRow);
        effects.push(SelectionEffect::Focus(Focus::SkillList));
        effects.push(SelectionEffect::SelectLastSkill);
        effects
    }

    /// Cancel pressed on the level row: back to the category list.
    pub fn on_cancel_level(&mut self) -> Effects {
        let mut effects = Effects::new();
        if !self.at_level_selector() {
            return effects;
        }
        self.reset();
        effects.push(SelectionEffect::HideLevelRow);
        if self.context == SelectionContext::Battle {
            effects.push(SelectionEffect::HideSkillList);
        }
        effects.push(SelectionEffect::Focus(Focus::Category));
        tracing::debug!(context = %self.context, "left count selection");
        effects
    }

    /// Cancel pressed on the skill list.
    pub fn on_skill_list_cancel<H>(&mut self, holder: &H) -> Effects
    where
        H: LedgerHolder + ?Sized,
    {
        let mut effects = Effects::new();
        if self.focus != Focus::SkillList {
            return effects;
        }
        match self.mode {
            SelectionMode::CountSelect => {
                self.focus = Focus::LevelSelector;
                effects.push(SelectionEffect::DeselectSkillList);
                if self.context == SelectionContext::Battle {
                    effects.push(SelectionEffect::ClearHelp);
                }
                if let Some(row) = self.level_row(holder) {
                    effects.push(SelectionEffect::ShowLevelRow(row));
                }
                effects.push(SelectionEffect::HighlightLevel(self.level));
                effects.push(SelectionEffect::Focus(Focus::LevelSelector));
            }
            SelectionMode::Normal => {
                self.reset();
                if self.context == SelectionContext::Battle {
                    effects.push(SelectionEffect::HideSkillList);
                }
                effects.push(SelectionEffect::Focus(Focus::Category));
            }
        }
        effects
    }

    /// A skill was picked; the host opens its target window.
    pub fn on_skill_confirm(&mut self) -> Effects {
        let mut effects = Effects::new();
        if self.focus != Focus::SkillList {
            return effects;
        }
        self.focus = Focus::Target;
        effects.push(SelectionEffect::Focus(Focus::Target));
        effects
    }

    /// Cancel pressed on the target window.
    pub fn on_target_cancel(&mut self) -> Effects {
        let mut effects = Effects::new();
        if self.focus != Focus::Target {
            return effects;
        }
        self.focus = Focus::SkillList;
        effects.push(SelectionEffect::HideTargetWindow);
        effects.push(SelectionEffect::Focus(Focus::SkillList));
        effects
    }

    /// `skill` was used on a target and its cost has been paid.
    ///
    /// If the level just ran dry while counting, the target window closes and
    /// the refreshed level row takes focus. Otherwise the target window stays
    /// open for another use.
    pub fn on_action_resolved<H>(&mut self, holder: &H, skill: SkillRef) -> Effects
    where
        H: LedgerHolder + ?Sized,
    {
        let mut effects = Effects::new();
        if self.focus != Focus::Target || self.mode != SelectionMode::CountSelect {
            return effects;
        }
        let exhausted = self
            .resolver
            .coordinate_of(skill)
            .is_some_and(|coordinate| !holder.ledger().can_afford(coordinate));
        if !exhausted {
            return effects;
        }
        self.focus = Focus::LevelSelector;
        effects.push(SelectionEffect::HideTargetWindow);
        if let Some(row) = self.level_row(holder) {
            effects.push(SelectionEffect::ShowLevelRow(row));
        }
        effects.push(SelectionEffect::HighlightLevel(self.level));
        effects.push(SelectionEffect::Focus(Focus::LevelSelector));
        tracing::debug!(skill = %skill.id, level = %self.level, "level exhausted, back to level row");
        effects
    }

    /// Row view of the open category, or `None` when it is not managed.
    pub fn level_row<H>(&self, holder: &H) -> Option<LevelRow>
    where
        H: LedgerHolder + ?Sized,
    {
        let spell_type = self.spell_type()?;
        let ledger = holder.ledger();
        let entries = self
            .resolver
            .levels()
            .map(|level| {
                let count = ledger
                    .get(Coordinate::new(spell_type, level))
                    .unwrap_or_default();
                LevelEntry::new(level, count)
            })
            .collect();
        Some(LevelRow {
            spell_type,
            entries,
        })
    }

    /// Learned skills the skill list should show, in id order.
    ///
    /// In count selection only the open category's skills at the cursor
    /// level are listed; otherwise every learned skill of the category.
    pub fn visible_skills<H, S>(&self, holder: &H, skills: &S) -> Vec<SkillId>
    where
        H: LearnableSkillHolder + ?Sized,
        S: SkillOracle + ?Sized,
    {
        let Some(category) = self.category else {
            return Vec::new();
        };
        let scope = self
            .coordinate()
            .map(|coordinate| self.resolver.skill_range(coordinate));
        holder
            .learned_skills()
            .iter()
            .copied()
            .filter(|id| scope.as_ref().is_none_or(|range| range.contains(&id.0)))
            .filter(|id| {
                skills
                    .skill(*id)
                    .is_some_and(|record| record.skill_type == category)
            })
            .collect()
    }

    fn at_level_selector(&self) -> bool {
        self.mode == SelectionMode::CountSelect && self.focus == Focus::LevelSelector
    }

    fn enter(&mut self, mode: SelectionMode, focus: Focus) {
        if self.mode != mode {
            tracing::debug!(context = %self.context, from = %self.mode, to = %mode, "selection mode changed");
        }
        self.mode = mode;
        self.focus = focus;
    }

    fn reset(&mut self) {
        self.mode = SelectionMode::Normal;
        self.focus = Focus::Category;
        self.category = None;
        self.level = SpellLevel::FIRST;
    }
}
