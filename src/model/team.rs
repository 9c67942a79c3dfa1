use serde::Serialize;

use super::player::Player;

/// An enrolled team and its squad, in enrollment order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Team {
    pub name: String,
    pub players: Vec<Player>,
}

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            players: Vec::new(),
        }
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }
}

/// Per-team summary line of the roster report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamStatistics {
    pub team_name: String,
    pub player_count: usize,
}

impl From<&Team> for TeamStatistics {
    fn from(team: &Team) -> Self {
        Self {
            team_name: team.name.clone(),
            player_count: team.player_count(),
        }
    }
}
