//! Night sub-phases and the witch's potions.

use serde::{Deserialize, Serialize};

use crate::core::Role;

/// One step of the night, in calling order.
///
/// Each role gets a confirm step (the moderator calls them awake) and an
/// action step that is only entered when the confirm step is accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NightSubPhase {
    WerewolfConfirm,
    WerewolfAction,
    WitchConfirm,
    WitchAction,
    SeerConfirm,
    SeerAction,
}

impl NightSubPhase {
    /// First step of every night.
    pub const FIRST: NightSubPhase = NightSubPhase::WerewolfConfirm;

    #[must_use]
    pub const fn is_confirm(self) -> bool {
        matches!(
            self,
            NightSubPhase::WerewolfConfirm | NightSubPhase::WitchConfirm | NightSubPhase::SeerConfirm
        )
    }

    /// The action step paired with a confirm step.
    #[must_use]
    pub const fn action(self) -> Option<NightSubPhase> {
        match self {
            NightSubPhase::WerewolfConfirm => Some(NightSubPhase::WerewolfAction),
            NightSubPhase::WitchConfirm => Some(NightSubPhase::WitchAction),
            NightSubPhase::SeerConfirm => Some(NightSubPhase::SeerAction),
            _ => None,
        }
    }

    /// The next role's confirm step, or `None` when the night is over.
    #[must_use]
    pub const fn next_role(self) -> Option<NightSubPhase> {
        match self {
            NightSubPhase::WerewolfConfirm | NightSubPhase::WerewolfAction => {
                Some(NightSubPhase::WitchConfirm)
            }
            NightSubPhase::WitchConfirm | NightSubPhase::WitchAction => {
                Some(NightSubPhase::SeerConfirm)
            }
            NightSubPhase::SeerConfirm | NightSubPhase::SeerAction => None,
        }
    }

    /// Role called during this step.
    #[must_use]
    pub const fn role(self) -> Role {
        match self {
            NightSubPhase::WerewolfConfirm | NightSubPhase::WerewolfAction => Role::Werewolf,
            NightSubPhase::WitchConfirm | NightSubPhase::WitchAction => Role::Witch,
            NightSubPhase::SeerConfirm | NightSubPhase::SeerAction => Role::Seer,
        }
    }

    #[must_use]
    pub const fn role_name(self) -> &'static str {
        self.role().name()
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            NightSubPhase::WerewolfConfirm => "werewolf-confirm",
            NightSubPhase::WerewolfAction => "werewolf-action",
            NightSubPhase::WitchConfirm => "witch-confirm",
            NightSubPhase::WitchAction => "witch-action",
            NightSubPhase::SeerConfirm => "seer-confirm",
            NightSubPhase::SeerAction => "seer-action",
        }
    }
}

impl std::fmt::Display for NightSubPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The witch's single-use potions. `true` means still available.
///
/// Lives for the whole game, not one night; a used potion never comes back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WitchPotions {
    pub save: bool,
    pub poison: bool,
}

impl Default for WitchPotions {
    fn default() -> Self {
        Self {
            save: true,
            poison: true,
        }
    }
}
