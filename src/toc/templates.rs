//! Fixed trailer blocks appended after the generated sections

/// Default "Contributing" block
pub const CONTRIBUTING: &str = "
## Contributing

Contributions are welcome! If you have any additional questions or improvements, please submit a pull request.

Before submitting a pull request, please make sure that you have updated the README.md file with the latest changes.
To do this, run the following commands:
```bash
readme-toc
```
";

/// Default "License" block
pub const LICENSE: &str = "
## License

This repository is licensed under the MIT License.
";

/// Trailer text handed to the assembler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boilerplate {
    pub contributing: String,
    pub license: String,
}

impl Default for Boilerplate {
    fn default() -> Self {
        Self {
            contributing: CONTRIBUTING.to_string(),
            license: LICENSE.to_string(),
        }
    }
}

impl Boilerplate {
    /// Contributing followed by License
    pub fn render(&self) -> String {
        format!("{}{}", self.contributing, self.license)
    }
}
