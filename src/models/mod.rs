pub mod abonnement;
pub mod adherent;
pub mod coach;
pub mod groupe;
pub mod location;
pub mod presence;
pub mod reservation;
pub mod school;
