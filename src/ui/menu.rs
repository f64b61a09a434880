// Interactive menu
// Numbered options read from a line-oriented input, results written back out

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};

use crate::config::RsaConfig;
use crate::rsa::{decode, encode, recover_private_key, sign, verify, KeyGenerator};

/// One entry of the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    GenerateKeys,
    Encode,
    Decode,
    Sign,
    Verify,
    RecoverKey,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::GenerateKeys,
        MenuChoice::Encode,
        MenuChoice::Decode,
        MenuChoice::Sign,
        MenuChoice::Verify,
        MenuChoice::RecoverKey,
    ];

    pub fn from_number(number: u32) -> Option<Self> {
        let index = usize::try_from(number).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    pub fn number(self) -> u32 {
        Self::ALL.iter().position(|&c| c == self).map_or(0, |i| i as u32 + 1)
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::GenerateKeys => "Generate keys",
            MenuChoice::Encode => "Encode message",
            MenuChoice::Decode => "Decode message",
            MenuChoice::Sign => "Sign message",
            MenuChoice::Verify => "Verify message signature",
            MenuChoice::RecoverKey => "Recover private key",
        }
    }
}

/// Menu reading answers from `input` and writing prompts to `output`
pub struct Menu<R: BufRead, W: Write> {
    input: R,
    output: W,
    config: RsaConfig,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W, config: RsaConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Show the options, run the chosen one once
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "Choose an option:")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{} - {}", choice.number(), choice.label())?;
        }

        let answer = self.prompt("Option: ")?;
        let choice = answer
            .parse::<u32>()
            .ok()
            .and_then(MenuChoice::from_number)
            .with_context(|| format!("unknown option {:?}", answer))?;

        self.dispatch(choice)
    }

    pub fn dispatch(&mut self, choice: MenuChoice) -> Result<()> {
        match choice {
            MenuChoice::GenerateKeys => self.generate_keys(),
            MenuChoice::Encode => {
                writeln!(self.output, "Enter the public key:")?;
                let (n, e) = self.read_key("e")?;
                let message = self.prompt_message("Enter the message:")?;
                let encoded = encode(n, e, &message)?;
                self.show("Result", &encoded)
            }
            MenuChoice::Decode => {
                writeln!(self.output, "Enter the private key:")?;
                let (n, d) = self.read_key("d")?;
                let encoded = self.prompt_message("Enter the encoded message:")?;
                let message = decode(n, d, &encoded)?;
                self.show("Result", &message)
            }
            MenuChoice::Sign => {
                writeln!(self.output, "Enter the private key:")?;
                let (n, d) = self.read_key("d")?;
                let message = self.prompt_message("Enter the message to sign:")?;
                let signature = sign(n, d, &message)?;
                self.show("Signature", &signature)
            }
            MenuChoice::Verify => {
                writeln!(self.output, "Enter the public key:")?;
                let (n, e) = self.read_key("e")?;
                let signature = self.prompt_message("Enter the signature:")?;
                let message = verify(n, e, &signature)?;
                self.show("Message", &message)
            }
            MenuChoice::RecoverKey => {
                writeln!(self.output, "Enter the public key:")?;
                let (n, e) = self.read_key("e")?;
                let d = recover_private_key(n, e)?;
                writeln!(self.output, "Private key: {}", d)?;
                Ok(())
            }
        }
    }

    fn generate_keys(&mut self) -> Result<()> {
        let keypair = KeyGenerator::new(self.config.clone())?.generate_key_pair()?;
        writeln!(self.output, "Keys generated")?;
        writeln!(self.output, "{}", keypair)?;
        Ok(())
    }

    fn read_key(&mut self, exponent: &str) -> Result<(i64, i64)> {
        let n = self.prompt_number("n")?;
        let x = self.prompt_number(exponent)?;
        Ok((n, x))
    }

    fn prompt_number(&mut self, name: &str) -> Result<i64> {
        let answer = self.prompt(&format!("{}: ", name))?;
        answer
            .parse()
            .with_context(|| format!("{} must be an integer, got {:?}", name, answer))
    }

    fn prompt_message(&mut self, header: &str) -> Result<String> {
        writeln!(self.output, "{}", header)?;
        self.read_line()
    }

    fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line).context("failed to read input")? == 0 {
            bail!("unexpected end of input");
        }
        Ok(line.trim().to_string())
    }

    fn show(&mut self, label: &str, value: &str) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}: {}", label, value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_menu(input: &str) -> (Result<()>, String) {
        let mut output = Vec::new();
        let result = Menu::new(Cursor::new(input), &mut output, RsaConfig::default()).run();
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_choice_numbers() {
        assert_eq!(MenuChoice::from_number(1), Some(MenuChoice::GenerateKeys));
        assert_eq!(MenuChoice::from_number(6), Some(MenuChoice::RecoverKey));
        assert_eq!(MenuChoice::from_number(0), None);
        assert_eq!(MenuChoice::from_number(7), None);
        for choice in MenuChoice::ALL {
            assert_eq!(MenuChoice::from_number(choice.number()), Some(choice));
        }
    }

    #[test]
    fn test_menu_lists_options() {
        let (_, output) = run_menu("6\n3233\n17\n");
        assert!(output.starts_with("Choose an option:\n1 - Generate keys\n"));
        assert!(output.contains("6 - Recover private key\n"));
    }

    #[test]
    fn test_menu_encode() {
        let (result, output) = run_menu("2\n3233\n17\nHELLO\n");
        assert!(result.is_ok());
        assert!(output.ends_with("Result: 0328 0474 3206 \n"));
    }

    #[test]
    fn test_menu_decode() {
        let (result, output) = run_menu("3\n3233\n2753\n0328 0474 3206\n");
        assert!(result.is_ok());
        assert!(output.ends_with("Result: HELLOX\n"));
    }

    #[test]
    fn test_menu_sign_and_verify() {
        let (_, output) = run_menu("4\n3233\n2753\nRSA\n");
        assert!(output.ends_with("Signature: 1823 0765 \n"));

        let (_, output) = run_menu("5\n3233\n17\n1823 0765\n");
        assert!(output.ends_with("Message: RSAX\n"));
    }

    #[test]
    fn test_menu_recover_key() {
        let (result, output) = run_menu("6\n3233\n17\n");
        assert!(result.is_ok());
        assert!(output.ends_with("Private key: 2753\n"));
    }

    #[test]
    fn test_menu_generate_keys() {
        let mut output = Vec::new();
        let config = RsaConfig::default()
            .with_prime_limit(300)
            .with_witness_limit(300);
        Menu::new(Cursor::new("1\n"), &mut output, config).run().unwrap();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Keys generated\nn: "));
        assert!(output.contains("\ne: "));
        assert!(output.contains("\nd: "));
    }

    #[test]
    fn test_menu_errors() {
        let (result, _) = run_menu("9\n");
        assert!(result.is_err());

        let (result, _) = run_menu("2\nabc\n");
        assert!(result.is_err());

        let (result, _) = run_menu("3\n3233\n2753\n032\n");
        let err = result.unwrap_err();
        assert!(err.downcast_ref::<crate::RsaError>().unwrap().is_invalid_input());

        let (result, _) = run_menu("2\n3233\n");
        assert!(result.is_err());
    }
}
