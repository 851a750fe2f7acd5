use crate::gameroom::*;
use std::io::Write;

/// Emits every snapshot as one JSON line, stdout by default,
/// for a browser bridge or any other external renderer.
/// Nothing else may write to the same stream.
#[derive(Debug)]
pub struct Json<W = std::io::Stdout> {
    out: W,
}

impl Default for Json {
    fn default() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W> Json<W>
where
    W: Write + Send,
{
    pub fn new(out: W) -> Self {
        Self { out }
    }
    fn emit(&mut self, snapshot: &Snapshot) -> anyhow::Result<()> {
        let line = serde_json::to_string(snapshot)?;
        writeln!(self.out, "{}", line)?;
        self.out.flush()?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl<W> Renderer for Json<W>
where
    W: Write + Send,
{
    async fn render(&mut self, snapshot: &Snapshot) {
        self.emit(snapshot)
            .unwrap_or_else(|e| log::error!("failed to emit snapshot: {}", e));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;
    #[tokio::test]
    async fn renders_one_parseable_line() {
        let mut json = Json::new(Vec::new());
        let mut engine = Engine::seeded(41);
        engine.handle(Command::Start, Instant::now());
        json.render(&engine.snapshot()).await;
        let text = String::from_utf8(json.out).unwrap();
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 1);
        assert!(text.ends_with('\n'));
        let value = serde_json::from_str::<serde_json::Value>(lines[0]).unwrap();
        assert_eq!(value["gameState"], "playing");
        assert_eq!(value["round"], 1);
    }
}
