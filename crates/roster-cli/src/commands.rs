//! Subcommands and how each one maps onto [`RosterModel`].
//!
//! [`apply`] is pure: it mutates the model and reports what to print and
//! whether the roster needs saving. All I/O stays in `main`.

use chrono::NaiveDate;
use clap::{Args, Subcommand};
use roster_core::{GroupId, PlayerData, PlayerId, RosterModel};
use serde_json::{Value, json};

pub const ABOUT: &str = "\
roster — keeps players, groups and who belongs to which group.

Players are shown by full name (surname first). Removing a player or a group
also removes every membership that refers to it.";

// ─── Command tree ────────────────────────────────────────────────────────────

#[derive(Subcommand, Debug)]
pub enum Command {
  /// Describe this tool.
  About,

  /// List players, or the members of one group in join order.
  Players {
    #[arg(long)]
    group: Option<GroupId>,
  },

  /// Manage players.
  #[command(subcommand)]
  Player(PlayerCommand),

  /// Manage groups.
  #[command(subcommand)]
  Group(GroupCommand),

  /// Manage group memberships.
  #[command(subcommand)]
  Member(MemberCommand),

  /// List the groups a player belongs to.
  GroupsFor { player_id: PlayerId },

  /// Print the whole roster as JSON.
  Export,
}

#[derive(Subcommand, Debug)]
pub enum PlayerCommand {
  Add(PlayerArgs),
  /// Replace name, surname and birthday of an existing player.
  Update(PlayerArgs),
  Remove { id: PlayerId },
  Show { id: PlayerId },
}

#[derive(Args, Debug)]
pub struct PlayerArgs {
  #[arg(long)]
  pub id:       PlayerId,
  #[arg(long)]
  pub name:     String,
  #[arg(long)]
  pub surname:  String,
  /// Calendar date, `YYYY-MM-DD`.
  #[arg(long)]
  pub birthday: NaiveDate,
}

impl From<PlayerArgs> for PlayerData {
  fn from(a: PlayerArgs) -> Self {
    PlayerData::new(a.id, a.name, a.surname, a.birthday)
  }
}

#[derive(Subcommand, Debug)]
pub enum GroupCommand {
  Add { group_id: GroupId },
  Remove { group_id: GroupId },
  List,
}

#[derive(Subcommand, Debug)]
pub enum MemberCommand {
  Add { player_id: PlayerId, group_id: GroupId },
  Remove { player_id: PlayerId, group_id: GroupId },
}

// ─── Execution ───────────────────────────────────────────────────────────────

/// What a command produced.
#[derive(Debug, PartialEq)]
pub struct Outcome {
  pub output:  Output,
  /// The model changed and must be written back.
  pub changed: bool,
}

#[derive(Debug, PartialEq)]
pub enum Output {
  Text(String),
  Json(Value),
}

impl Outcome {
  fn read(value: Value) -> Self {
    Self { output: Output::Json(value), changed: false }
  }

  fn write(value: Value) -> Self {
    Self { output: Output::Json(value), changed: true }
  }
}

pub fn apply(
  model: &mut RosterModel,
  command: Command,
) -> anyhow::Result<Outcome> {
  let outcome = match command {
    Command::About => {
      Outcome { output: Output::Text(ABOUT.to_owned()), changed: false }
    }
    Command::Players { group: None } => {
      Outcome::read(serde_json::to_value(model.players())?)
    }
    Command::Players { group: Some(group_id) } => {
      Outcome::read(serde_json::to_value(model.players_in_group(group_id)?)?)
    }
    Command::Player(cmd) => apply_player(model, cmd)?,
    Command::Group(cmd) => apply_group(model, cmd)?,
    Command::Member(MemberCommand::Add { player_id, group_id }) => {
      Outcome::write(serde_json::to_value(
        model.add_membership(player_id, group_id)?,
      )?)
    }
    Command::Member(MemberCommand::Remove { player_id, group_id }) => {
      model.remove_membership(player_id, group_id)?;
      Outcome::write(json!({ "player_id": player_id, "group_id": group_id }))
    }
    Command::GroupsFor { player_id } => {
      Outcome::read(serde_json::to_value(model.groups_for_player(player_id)?)?)
    }
    Command::Export => Outcome::read(serde_json::to_value(model.snapshot())?),
  };
  Ok(outcome)
}

fn apply_player(
  model: &mut RosterModel,
  cmd: PlayerCommand,
) -> anyhow::Result<Outcome> {
  Ok(match cmd {
    PlayerCommand::Add(args) => {
      Outcome::write(serde_json::to_value(model.add_player(args.into())?)?)
    }
    PlayerCommand::Update(args) => {
      Outcome::write(serde_json::to_value(model.update_player(args.into())?)?)
    }
    PlayerCommand::Remove { id } => {
      Outcome::write(serde_json::to_value(model.remove_player(id)?)?)
    }
    PlayerCommand::Show { id } => {
      let player = model.player(id)?;
      let groups = model.groups_for_player(id)?;
      Outcome::read(json!({ "player": player, "groups": groups }))
    }
  })
}

fn apply_group(
  model: &mut RosterModel,
  cmd: GroupCommand,
) -> anyhow::Result<Outcome> {
  Ok(match cmd {
    GroupCommand::Add { group_id } => {
      Outcome::write(serde_json::to_value(model.add_group(group_id)?)?)
    }
    GroupCommand::Remove { group_id } => {
      Outcome::write(serde_json::to_value(model.remove_group(group_id)?)?)
    }
    GroupCommand::List => Outcome::read(serde_json::to_value(model.groups())?),
  })
}
