//! Interactive console prompt

use colored::Colorize;
use planqr_application::{PlanQuerySource, QuerySourceError};
use planqr_domain::PlanQuery;
use std::io::{self, BufRead, BufReader, Stderr, Stdin, Write};
use std::sync::Mutex;

const PROJECT_PROMPT: &str = "Project number (e.g. 25-001): ";
const TITLE_PROMPT: &str = "Plan title (e.g. Grundriss Erdgeschoss): ";

/// Asks for project number and plan title on a terminal.
///
/// Prompts go to the writer (stderr by default) so stdout stays clean for
/// the result. End of input aborts.
pub struct ConsolePromptSource<R, W> {
    input: Mutex<R>,
    output: Mutex<W>,
}

impl ConsolePromptSource<BufReader<Stdin>, Stderr> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stderr())
    }
}

impl<R: BufRead + Send, W: Write + Send> ConsolePromptSource<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: Mutex::new(input),
            output: Mutex::new(output),
        }
    }

    fn ask(&self, prompt: &str) -> Result<String, QuerySourceError> {
        {
            let mut output = self.output.lock().map_err(|_| QuerySourceError::Aborted)?;
            write!(output, "{}", prompt.bold())?;
            output.flush()?;
        }

        let mut line = String::new();
        let read = self
            .input
            .lock()
            .map_err(|_| QuerySourceError::Aborted)?
            .read_line(&mut line)?;
        if read == 0 {
            return Err(QuerySourceError::Aborted);
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead + Send, W: Write + Send> PlanQuerySource for ConsolePromptSource<R, W> {
    fn fetch(&self) -> Result<PlanQuery, QuerySourceError> {
        let project_number = self.ask(PROJECT_PROMPT)?;
        let plan_title = self.ask(TITLE_PROMPT)?;
        Ok(PlanQuery::try_new(project_number, plan_title)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planqr_domain::InputError;
    use std::io::Cursor;

    fn source(input: &str) -> ConsolePromptSource<Cursor<Vec<u8>>, Vec<u8>> {
        ConsolePromptSource::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_reads_both_answers() {
        let source = source("25-001\nGrundriss Erdgeschoss\n");

        let query = source.fetch().unwrap();

        assert_eq!(query.project_number(), "25-001");
        assert_eq!(query.plan_title(), "Grundriss Erdgeschoss");
        let shown = String::from_utf8(source.output.lock().unwrap().clone()).unwrap();
        assert!(shown.contains("Project number"));
        assert!(shown.contains("Plan title"));
    }

    #[test]
    fn test_windows_line_endings() {
        let query = source("25-001\r\nSchnitt A-A\r\n").fetch().unwrap();
        assert_eq!(query.plan_title(), "Schnitt A-A");
    }

    #[test]
    fn test_empty_answer_is_invalid() {
        let result = source("25-001\n\n").fetch();
        assert!(matches!(
            result,
            Err(QuerySourceError::Invalid(InputError::EmptyPlanTitle))
        ));
    }

    #[test]
    fn test_end_of_input_aborts() {
        let result = source("25-001\n").fetch();
        assert!(matches!(result, Err(QuerySourceError::Aborted)));
    }
}
