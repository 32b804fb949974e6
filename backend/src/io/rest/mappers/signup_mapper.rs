//! Response shaping for signups: both ends in abbreviated form.

use super::activity_mapper::ActivityMapper;
use super::camper_mapper::CamperMapper;
use crate::domain::commands::signup::CreateSignupCommand;
use crate::domain::models::SignupDetail;
use shared::{CreateSignupRequest, SignupDetail as SignupDetailDto};

pub struct SignupMapper;

impl SignupMapper {
    pub fn to_create_command(dto: CreateSignupRequest) -> CreateSignupCommand {
        CreateSignupCommand {
            camper_id: dto.camper_id,
            activity_id: dto.activity_id,
            time: dto.time,
        }
    }

    pub fn to_detail_dto(domain: SignupDetail) -> SignupDetailDto {
        SignupDetailDto {
            id: domain.signup.id,
            time: domain.signup.time,
            camper_id: domain.signup.camper_id,
            activity_id: domain.signup.activity_id,
            activity: ActivityMapper::to_dto(domain.activity),
            camper: CamperMapper::to_summary_dto(domain.camper),
        }
    }
}
