use crate::GOAL;
use crate::Points;
use crate::gameroom::*;
use crate::players::*;
use colored::Colorize;

/// Coloured leaderboard and puzzle, redrawn on every snapshot.
#[derive(Debug, Default)]
pub struct Terminal;

#[async_trait::async_trait]
impl Renderer for Terminal {
    async fn render(&mut self, snapshot: &Snapshot) {
        println!("{}", Self::draw(snapshot));
    }
}

impl Terminal {
    /// Cells in a progress bar; each is worth GOAL / CELLS points.
    const CELLS: usize = 20;

    pub fn draw(snapshot: &Snapshot) -> String {
        let mut out = Vec::new();
        out.push(format!("{}", "── race to 100 ──".bold()));
        out.extend(snapshot.players.iter().map(Self::lane));
        out.push(String::new());
        match snapshot.game_state {
            Phase::Start => out.push("press start to race".italic().to_string()),
            Phase::Playing => out.extend(Self::puzzle(snapshot)),
            Phase::Finished => out.extend(Self::podium(&snapshot.podium)),
        }
        out.join("\n")
    }
    fn lane(player: &Player) -> String {
        let filled = player.score() as usize / (GOAL as usize / Self::CELLS);
        let bar = match player.is_human() {
            true => "█".repeat(filled).as_str().blue(),
            false => "█".repeat(filled).as_str().green(),
        };
        let rest = "░".repeat(Self::CELLS.saturating_sub(filled)).as_str().dimmed();
        let tag = match player.is_human() {
            true => "👨‍💻",
            false => "🤖",
        };
        format!("{} {:<10} {}{} {:>3}", tag, player.name(), bar, rest, player.score())
    }
    fn puzzle(snapshot: &Snapshot) -> Vec<String> {
        let q = &snapshot.current_question;
        let mut out = vec![
            format!("{} · {} · round {}", q.title().bold(), q.difficulty(), snapshot.round),
            q.description().to_string(),
            format!("target: {}", q.target().to_string().as_str().yellow().bold()),
        ];
        out.extend(q.tiles().iter().map(|tile| {
            let line = format!("[{}] {}", tile.id, tile);
            match snapshot.selected_options.contains(&tile.id) {
                true => line.as_str().reversed().to_string(),
                false => line,
            }
        }));
        out.push(Self::status(snapshot));
        out
    }
    fn status(snapshot: &Snapshot) -> String {
        let mut parts = Vec::new();
        match snapshot.show_result {
            Some(Verdict::Correct) => parts.push("correct!".green().bold().to_string()),
            Some(Verdict::Wrong) => parts.push("wrong".red().bold().to_string()),
            None => {}
        }
        if let Some(points) = snapshot.current_score {
            parts.push(Self::flash(points));
        }
        if snapshot.streak > 1 {
            parts.push(format!("streak x{}", snapshot.streak).as_str().magenta().to_string());
        }
        if snapshot.waiting_for_others {
            parts.push("waiting for others…".dimmed().to_string());
        }
        parts.join("  ")
    }
    fn flash(points: Points) -> String {
        format!("+{}", points).as_str().yellow().bold().to_string()
    }
    fn podium(podium: &Podium) -> Vec<String> {
        std::iter::once("race over".bold().to_string())
            .chain(podium.standings().iter().map(|s| {
                format!("{} {} ({:.1}s)", s.medal, s.name, s.answer_time.as_secs_f32())
            }))
            .collect()
    }
}
