use std::io::{self, BufRead, Write};

use seq_gen_core::validate::parse_length;
use seq_gen_core::{Result, SequenceRequest};

use crate::args::GenerateArgs;

/// Line-based question/answer loop over any reader and writer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `question` and returns the trimmed answer.
    ///
    /// End of input reads as an empty answer.
    pub fn ask(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_owned())
    }

    /// Returns `given` when present, asks otherwise.
    pub fn ask_unless(&mut self, given: Option<&str>, question: &str) -> io::Result<String> {
        match given {
            Some(value) => Ok(value.to_owned()),
            None => self.ask(question),
        }
    }
}

/// Collects the four inputs of a run, in prompt order.
///
/// The length is validated as soon as it is read, so a bad length stops
/// the run before any other question.
pub fn collect_request<R: BufRead, W: Write>(
    args: &GenerateArgs,
    prompter: &mut Prompter<R, W>,
) -> Result<SequenceRequest> {
    let length = prompter.ask_unless(args.length.as_deref(), "Enter the sequence length: ")?;
    let length = parse_length(&length)?;

    let id = prompter.ask_unless(args.id.as_deref(), "Enter the sequence ID: ")?;
    let description = prompter.ask_unless(
        args.description.as_deref(),
        "Provide a description of the sequence: ",
    )?;
    let token = prompter.ask_unless(args.token.as_deref(), "Enter your name: ")?;

    SequenceRequest::with_length(length, &id, &description, &token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use seq_gen_core::{Error, InputError};
    use std::io::Cursor;

    fn run(input: &str, args: &GenerateArgs) -> (Result<SequenceRequest>, String) {
        let mut output = Vec::new();
        let result = {
            let mut prompter = Prompter::new(Cursor::new(input.as_bytes()), &mut output);
            collect_request(args, &mut prompter)
        };
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_prompts_in_order() {
        let (request, output) = run("25\nseq1\na test\nAda\n", &GenerateArgs::default());
        let request = request.unwrap();
        assert_eq!(request.length, 25);
        assert_eq!(request.id, "seq1");
        assert_eq!(request.description, "a test");
        assert_eq!(request.token, "Ada");
        assert_eq!(
            output,
            "Enter the sequence length: Enter the sequence ID: \
             Provide a description of the sequence: Enter your name: "
        );
    }

    #[test]
    fn test_bad_length_stops_early() {
        let (request, output) = run("ten\nseq1\n\nAda\n", &GenerateArgs::default());
        assert!(matches!(request, Err(Error::Input(InputError::InvalidLength(_)))));
        assert_eq!(output, "Enter the sequence length: ");
    }

    #[test]
    fn test_empty_description_allowed() {
        let (request, _) = run("5\nseq1\n\nAda\n", &GenerateArgs::default());
        assert_eq!(request.unwrap().description, "");
    }

    #[test]
    fn test_empty_name_rejected() {
        let (request, _) = run("5\nseq1\n\n\n", &GenerateArgs::default());
        assert!(matches!(request, Err(Error::Input(InputError::EmptyField("name")))));
    }

    #[test]
    fn test_end_of_input_is_empty_answer() {
        let (request, _) = run("5\n", &GenerateArgs::default());
        assert!(matches!(request, Err(Error::Input(InputError::EmptyField("sequence ID")))));
    }

    #[test]
    fn test_given_values_are_not_prompted() {
        let args = GenerateArgs {
            length: Some("12".to_owned()),
            id: Some("seq9".to_owned()),
            token: Some("Grace".to_owned()),
            ..GenerateArgs::default()
        };
        let (request, output) = run("from stdin\n", &args);
        let request = request.unwrap();
        assert_eq!(request.length, 12);
        assert_eq!(request.description, "from stdin");
        assert_eq!(output, "Provide a description of the sequence: ");
    }
}
