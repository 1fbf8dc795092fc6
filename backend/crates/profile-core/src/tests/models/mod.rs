mod badge;
mod learning_goal;
mod user_profile;
