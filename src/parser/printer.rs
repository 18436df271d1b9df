use crate::constant::*;
use crate::parser::interface::UserInterface;
use crate::registry::Registry;

/// Renders the usage summary and per-option help from a registry snapshot.
pub(crate) struct Printer {
    positionals: Vec<(String, String)>,
    options: Vec<(String, String)>,
}

impl Printer {
    pub(crate) fn snapshot(registry: &Registry) -> Self {
        let mut positionals = Vec::default();
        let mut options = Vec::default();

        for argument in registry.iter() {
            let row = (argument.name().to_string(), argument.help().to_string());

            if argument.is_positional() {
                positionals.push(row);
            } else {
                options.push(row);
            }
        }

        Self {
            positionals,
            options,
        }
    }

    pub(crate) fn print_help(
        &self,
        program: impl Into<String>,
        user_interface: &(impl UserInterface + ?Sized),
    ) {
        let help_flags = format!("-{HELP_SHORT}, --{HELP_NAME}");
        let mut column_width = help_flags.len();

        for (name, _) in &self.options {
            if column_width < name.len() {
                column_width = name.len();
            }
        }

        let mut summary = vec![format!("[-{HELP_SHORT}]")];

        // Both groups drain in reverse of how they were filled, reproducing the stack order
        // of the legacy renderer.
        for (name, _) in self.positionals.iter().rev() {
            summary.push(name.clone());
        }

        user_interface.print(format!(
            "usage: {p} {s}",
            p = program.into(),
            s = summary.join(" ")
        ));
        user_interface.print("".to_string());
        user_interface.print("options:".to_string());
        user_interface.print(format!(
            " {:column_width$}  Show this help message and exit.",
            help_flags
        ));

        for (name, help) in self.options.iter().rev() {
            if help.is_empty() {
                user_interface.print(format!(" {name}"));
            } else {
                user_interface.print(format!(" {:column_width$}  {help}", name));
            }
        }
    }
}

/// Render each declared argument with its current canonical value, in declaration order.
pub(crate) fn print_values(registry: &Registry, user_interface: &(impl UserInterface + ?Sized)) {
    for argument in registry.iter() {
        user_interface.print(format!(
            "{name}: value={value}",
            name = argument.name(),
            value = argument.canonical()
        ));
    }
}
