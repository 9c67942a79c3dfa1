use serde::Serialize;
use tracing::{debug, instrument};

use crate::error::{CapacityKind, Result, RosterError};
use crate::model::{Player, PlayerLocation, Team, TeamStatistics};
use crate::validation::{names_match, validate_birthdate, validate_kit_number, validate_name};

/// Capacity limits for a [`RosterStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RosterLimits {
    pub max_teams: usize,
    pub max_players: usize,
}

impl Default for RosterLimits {
    fn default() -> Self {
        Self {
            max_teams: 6,
            max_players: 20,
        }
    }
}

/// In-memory roster of enrolled teams and their players.
///
/// Teams and players keep their insertion order, so the index returned by
/// [`RosterStore::enroll_team`] stays valid for the life of the store.
/// Every failed operation leaves the store unchanged.
///
/// # Examples
///
/// ```
/// use roster_kit::{Birthdate, Player, RosterStore};
///
/// let mut store = RosterStore::new();
/// let falcons = store.enroll_team("Falcons")?;
/// store.add_player(
///     falcons,
///     Player::new("Ali Noor", 7, "FC X", Birthdate::new(1, 1, 2000), "Forward"),
/// )?;
///
/// let (team, player) = store.search_player("ALI NOOR").unwrap();
/// assert_eq!(team.name, "Falcons");
/// assert_eq!(player.kit_number, 7);
/// # Ok::<(), roster_kit::RosterError>(())
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct RosterStore {
    limits: RosterLimits,
    teams: Vec<Team>,
}

impl RosterStore {
    /// Create an empty store with the default limits (6 teams, 20 players each).
    pub fn new() -> Self {
        Self::with_limits(RosterLimits::default())
    }

    /// Create an empty store using the provided limits.
    pub fn with_limits(limits: RosterLimits) -> Self {
        Self {
            teams: Vec::with_capacity(limits.max_teams),
            limits,
        }
    }

    pub fn limits(&self) -> RosterLimits {
        self.limits
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn team(&self, index: usize) -> Option<&Team> {
        self.teams.get(index)
    }

    pub fn player(&self, location: PlayerLocation) -> Option<&Player> {
        self.teams
            .get(location.team_index)?
            .players
            .get(location.player_index)
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Enroll a new team and return its index.
    #[instrument(skip(self))]
    pub fn enroll_team(&mut self, name: &str) -> Result<usize> {
        if self.teams.len() >= self.limits.max_teams {
            debug!(limit = self.limits.max_teams, "team capacity reached");
            return Err(RosterError::CapacityExceeded {
                kind: CapacityKind::Teams,
                limit: self.limits.max_teams,
            });
        }
        validate_name(name)?;

        let index = self.teams.len();
        self.teams.push(Team::new(name));
        debug!(index, "enrolled team");
        Ok(index)
    }

    /// Add a player to the team at `team_index`.
    #[instrument(skip(self, player), fields(player = %player.name))]
    pub fn add_player(&mut self, team_index: usize, player: Player) -> Result<()> {
        let team_count = self.teams.len();
        let max_players = self.limits.max_players;
        let team = self
            .teams
            .get_mut(team_index)
            .ok_or(RosterError::UnknownTeam {
                index: team_index,
                team_count,
            })?;

        if team.players.len() >= max_players {
            debug!(team = %team.name, limit = max_players, "squad capacity reached");
            return Err(RosterError::CapacityExceeded {
                kind: CapacityKind::Players,
                limit: max_players,
            });
        }
        validate_name(&player.name)?;
        if team.players.iter().any(|p| names_match(&p.name, &player.name)) {
            return Err(RosterError::DuplicateName { name: player.name });
        }
        if team.players.iter().any(|p| p.kit_number == player.kit_number) {
            return Err(RosterError::DuplicateKitNumber {
                kit_number: player.kit_number,
            });
        }
        validate_kit_number(player.kit_number)?;
        validate_birthdate(&player.birthdate)?;

        team.players.push(player);
        debug!(team = %team.name, squad_size = team.players.len(), "added player");
        Ok(())
    }

    /// Find the first player whose name matches `name`, ignoring case.
    ///
    /// Teams are scanned in enrollment order, then players in the order
    /// they were added.
    pub fn find_player(&self, name: &str) -> Option<PlayerLocation> {
        self.teams
            .iter()
            .enumerate()
            .find_map(|(team_index, team)| {
                team.players
                    .iter()
                    .position(|p| names_match(&p.name, name))
                    .map(|player_index| PlayerLocation {
                        team_index,
                        player_index,
                    })
            })
    }

    /// Like [`RosterStore::find_player`], resolved to the team and player records.
    pub fn search_player(&self, name: &str) -> Option<(&Team, &Player)> {
        let location = self.find_player(name)?;
        let team = &self.teams[location.team_index];
        Some((team, &team.players[location.player_index]))
    }

    /// Player counts per team, in enrollment order.
    pub fn team_statistics(&self) -> Vec<TeamStatistics> {
        self.teams.iter().map(TeamStatistics::from).collect()
    }
}

impl Default for RosterStore {
    fn default() -> Self {
        Self::new()
    }
}
