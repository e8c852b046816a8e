//! Fixed texts shown by the bot.

pub const WELCOME: &str = "\
!!! Welcome to the assistant bot !!!

Enter the 'help' command for additional information on the command.";

pub const PROMPT: &str = "Enter a command: ";

pub const HELP: &str = "\
>>> BOT COMMAND HELPER:

hello (Say hello to the bot)
add (Add a new user. Arguments: user_name phone_number)
change (Change user phone. Arguments: user_name phone_number)
phone (Display user phone. Argument: user_name)
all (Display all users info)
add-birthday (Add birthday. Arguments: user_name DD.MM.YYYY)
change-birthday (Change user birthday. Arguments: user_name DD.MM.YYYY)
show-birthday (Display birthday of a contact. Arguments: user_name)
birthdays (Display birthdays for the next week)
delete (Delete user. Arguments: user_name phone_number)
search (Find contacts by approximate name. Arguments: query)
exit, close OR bye (Save the address book and finish)

>>> GOOD LUCK!";
