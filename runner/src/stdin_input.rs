use common::input::{InputAdapter, InputEvent, parse_line};
use common::{log, log_debug};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::LinesStream;

pub async fn read_stdin_commands(adapter: InputAdapter) {
    forward_lines(BufReader::new(tokio::io::stdin()), &adapter).await;
}

/// Feeds text commands to the adapter until a quit line, end of input or a
/// read error.
pub async fn forward_lines<R>(reader: R, adapter: &InputAdapter)
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = LinesStream::new(reader.lines());

    while let Some(line) = lines.next().await {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log!("Failed to read input: {}", e);
                return;
            }
        };

        match parse_line(&line) {
            Some(InputEvent::Quit) => {
                adapter.on_quit();
                return;
            }
            Some(event) => adapter.dispatch(event),
            None => log_debug!("Ignoring input line: {:?}", line),
        }
    }

    log!("Input closed");
}
