mod about;
mod blender;
mod career;
mod cli_tools;
mod contact;
mod footer;
mod hero;
mod publications;
mod teaching;

pub use about::About;
pub use blender::Blender;
pub use career::Career;
pub use cli_tools::CliTools;
pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use publications::Publications;
pub use teaching::Teaching;
