//! Line-oriented transport over any async reader/writer.
//!
//! Used by `shiritori play` on stdin/stdout. Each input line is one message:
//!
//! - `/<start command>` or `/start` starts a game
//! - `/<reset command>` or `/reset` resets it
//! - `#room text` posts `text` in channel `room` (also switches the current channel)
//! - anything else is a word submitted to the current channel
//!
//! Replies are written as `[channel] text`, reactions as the marker emoji.

use shiritori_core::transport::{ChatTransport, TransportError};
use shiritori_types::event::{CommandSpec, Feedback, InboundEvent};
use shiritori_types::ids::{ChannelId, MessageId};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};
use tracing::debug;

const START_ALIAS: &str = "start";
const RESET_ALIAS: &str = "reset";

/// Transport that reads messages line by line and writes feedback as text.
pub struct ConsoleTransport<R, W> {
    lines: Lines<R>,
    writer: W,
    channel_id: ChannelId,
    start_commands: Vec<String>,
    reset_commands: Vec<String>,
}

impl<R, W> ConsoleTransport<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    /// Create a transport posting to `channel_id` until a `#room` prefix
    /// switches it.
    pub fn new(reader: R, writer: W, channel_id: ChannelId) -> Self {
        Self {
            lines: reader.lines(),
            writer,
            channel_id,
            start_commands: vec![START_ALIAS.to_string()],
            reset_commands: vec![RESET_ALIAS.to_string()],
        }
    }

    /// Channel that plain lines are posted to.
    pub fn channel_id(&self) -> &ChannelId {
        &self.channel_id
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Turn one input line into an event, or `None` for an unknown command.
    fn parse_line(&mut self, line: &str) -> Option<InboundEvent> {
        let mut text = line;
        if let Some(rest) = text.strip_prefix('#') {
            let (room, remainder) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            if !room.is_empty() {
                self.channel_id = ChannelId::new(room);
                text = remainder;
            }
        }

        let channel_id = self.channel_id.clone();
        if let Some(command) = text.trim().strip_prefix('/') {
            let command = command.trim();
            if self.start_commands.iter().any(|c| c == command) {
                return Some(InboundEvent::StartGame { channel_id });
            }
            if self.reset_commands.iter().any(|c| c == command) {
                return Some(InboundEvent::ResetGame { channel_id });
            }
            debug!(%command, "unknown command");
            return None;
        }

        Some(InboundEvent::SubmitWord {
            channel_id,
            message_id: MessageId::generate(),
            raw_text: text.to_string(),
            author_is_bot: false,
        })
    }

    async fn write_line(&mut self, line: &str) -> Result<(), TransportError> {
        self.writer.write_all(line.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await?;
        Ok(())
    }
}

impl<R, W> ChatTransport for ConsoleTransport<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn connect(&mut self) -> Result<(), TransportError> {
        debug!(channel_id = %self.channel_id, "console transport ready");
        Ok(())
    }

    async fn register_commands(&mut self, commands: &[CommandSpec]) -> Result<(), TransportError> {
        // Configured names come first so they win over the aliases in help output
        if let [start, reset, ..] = commands {
            self.start_commands = vec![start.name.clone(), START_ALIAS.to_string()];
            self.reset_commands = vec![reset.name.clone(), RESET_ALIAS.to_string()];
        }

        let mut help = String::from("commands:");
        for command in commands {
            help.push_str(&format!(" /{} ({})", command.name, command.description));
        }
        self.write_line(&help).await
    }

    async fn next_event(&mut self) -> Result<Option<InboundEvent>, TransportError> {
        loop {
            let Some(line) = self.lines.next_line().await? else {
                return Ok(None);
            };
            if let Some(event) = self.parse_line(&line) {
                return Ok(Some(event));
            }
            let notice = format!("unknown command: {}", line.trim());
            self.write_line(&notice).await?;
        }
    }

    async fn deliver(&mut self, feedback: Feedback) -> Result<(), TransportError> {
        let line = match feedback {
            Feedback::Reply { channel_id, text } => format!("[{channel_id}] {text}"),
            Feedback::Reaction { kind, .. } => kind.emoji().to_string(),
        };
        self.write_line(&line).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shiritori_types::config::CommandConfig;
    use shiritori_types::event::ReactionKind;

    fn transport(input: &'static str) -> ConsoleTransport<&'static [u8], Vec<u8>> {
        ConsoleTransport::new(input.as_bytes(), Vec::new(), ChannelId::new("console"))
    }

    fn output(transport: ConsoleTransport<&'static [u8], Vec<u8>>) -> String {
        String::from_utf8(transport.into_writer()).unwrap()
    }

    #[tokio::test]
    async fn parses_commands_and_words() {
        let mut t = transport("/start\nさくら\n/reset\n");

        assert_eq!(
            t.next_event().await.unwrap(),
            Some(InboundEvent::StartGame {
                channel_id: ChannelId::new("console"),
            })
        );
        match t.next_event().await.unwrap() {
            Some(InboundEvent::SubmitWord {
                raw_text,
                author_is_bot,
                ..
            }) => {
                assert_eq!(raw_text, "さくら");
                assert!(!author_is_bot);
            }
            other => panic!("expected word, got {other:?}"),
        }
        assert!(matches!(
            t.next_event().await.unwrap(),
            Some(InboundEvent::ResetGame { .. })
        ));
        assert_eq!(t.next_event().await.unwrap(), None);
    }

    #[tokio::test]
    async fn registered_command_names_are_recognized() {
        let mut t = transport("/しりとり開始\n/しりとりリセット\n");
        t.register_commands(&CommandConfig::default().specs())
            .await
            .unwrap();

        assert!(matches!(
            t.next_event().await.unwrap(),
            Some(InboundEvent::StartGame { .. })
        ));
        assert!(matches!(
            t.next_event().await.unwrap(),
            Some(InboundEvent::ResetGame { .. })
        ));

        let out = output(t);
        assert!(out.starts_with("commands: /しりとり開始"));
    }

    #[tokio::test]
    async fn channel_prefix_switches_channel() {
        let mut t = transport("#kitchen /start\n#kitchen いぬ\nねこ\n");

        assert_eq!(
            t.next_event().await.unwrap(),
            Some(InboundEvent::StartGame {
                channel_id: ChannelId::new("kitchen"),
            })
        );
        assert!(matches!(
            t.next_event().await.unwrap(),
            Some(InboundEvent::SubmitWord { channel_id, raw_text, .. })
                if channel_id.as_str() == "kitchen" && raw_text == "いぬ"
        ));
        // The switch sticks for later lines
        assert_eq!(t.channel_id().as_str(), "kitchen");
        assert!(matches!(
            t.next_event().await.unwrap(),
            Some(InboundEvent::SubmitWord { channel_id, .. }) if channel_id.as_str() == "kitchen"
        ));
    }

    #[tokio::test]
    async fn unknown_command_is_skipped_with_notice() {
        let mut t = transport("/dance\nさくら\n");
        assert!(matches!(
            t.next_event().await.unwrap(),
            Some(InboundEvent::SubmitWord { raw_text, .. }) if raw_text == "さくら"
        ));
        assert_eq!(output(t), "unknown command: /dance\n");
    }

    #[tokio::test]
    async fn delivers_replies_and_reactions() {
        let mut t = transport("");
        t.deliver(Feedback::Reaction {
            message_id: MessageId::new("m1"),
            kind: ReactionKind::Success,
        })
        .await
        .unwrap();
        t.deliver(Feedback::Reply {
            channel_id: ChannelId::new("console"),
            text: "hello".to_string(),
        })
        .await
        .unwrap();

        assert_eq!(output(t), "✅\n[console] hello\n");
    }
}
