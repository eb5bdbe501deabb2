use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Create a user
    Submit {
        /// User name
        #[arg(long)]
        name: String,

        /// User email
        #[arg(long)]
        email: String,
    },

    /// List users, newest first
    List,

    /// Interactive form: prompts for name and email until EOF
    Form,
}
