mod new_identity;
mod role;
