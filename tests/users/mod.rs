mod integration;
mod register;
mod resend_email;
mod verify_user;
