//! Rule sets for every validated route.

use super::{FieldRule, Rule, Rule::*, RuleSet};

const ID_PARAM: FieldRule = FieldRule::param("id", &[Required, Id]);

const USERNAME: &[Rule] = &[Required, IsString, Username, Length { min: 3, max: 32 }];
const EMAIL: &[Rule] = &[Required, IsString, Email, Length { min: 3, max: 254 }];
const PASSWORD: &[Rule] = &[Required, IsString, Length { min: 8, max: 128 }];

const OPTIONAL_USERNAME: &[Rule] = &[IsString, Username, Length { min: 3, max: 32 }];
const OPTIONAL_EMAIL: &[Rule] = &[IsString, Email, Length { min: 3, max: 254 }];
const OPTIONAL_PASSWORD: &[Rule] = &[IsString, Length { min: 8, max: 128 }];

const TITLE: &[Rule] = &[Required, IsString, Length { min: 1, max: 255 }];
const OPTIONAL_TITLE: &[Rule] = &[IsString, Length { min: 1, max: 255 }];
const DESCRIPTION: &[Rule] = &[IsString, Length { min: 0, max: 5000 }];
const DURATION: &[Rule] = &[IsInteger, Range { min: 0, max: 86_400 }];

const GENRE_NAME: &[Rule] = &[Required, IsString, Length { min: 3, max: 255 }];
const OPTIONAL_GENRE_NAME: &[Rule] = &[IsString, Length { min: 3, max: 255 }];

pub const LOGIN: RuleSet = &[
    FieldRule::body("username", &[Required, IsString, Length { min: 3, max: 254 }]),
    FieldRule::body("password", &[Required, IsString, Length { min: 1, max: 128 }]),
];

pub const CREATE_USER: RuleSet = &[
    FieldRule::body("username", USERNAME),
    FieldRule::body("email", EMAIL),
    FieldRule::body("password", PASSWORD),
];

pub const GET_USER: RuleSet = &[ID_PARAM];

pub const UPDATE_USER: RuleSet = &[
    ID_PARAM,
    FieldRule::body("username", OPTIONAL_USERNAME),
    FieldRule::body("email", OPTIONAL_EMAIL),
    FieldRule::body("password", OPTIONAL_PASSWORD),
];

pub const DELETE_USER: RuleSet = &[ID_PARAM];

pub const SEED_USERS: RuleSet = &[FieldRule::query(
    "amount",
    &[Required, IsInteger, Range { min: 1, max: 100 }],
)];

pub const LIST_TRACKS: RuleSet = &[FieldRule::query("userId", &[Id])];

pub const CREATE_TRACK: RuleSet = &[
    FieldRule::body("title", TITLE),
    FieldRule::body("description", DESCRIPTION),
    FieldRule::body("duration", DURATION),
    FieldRule::body("albumId", &[Id]),
    FieldRule::body("genreIds", &[IdList]),
];

pub const GET_TRACK: RuleSet = &[ID_PARAM];

pub const UPDATE_TRACK: RuleSet = &[
    ID_PARAM,
    FieldRule::body("title", OPTIONAL_TITLE),
    FieldRule::body("description", DESCRIPTION),
    FieldRule::body("duration", DURATION),
    FieldRule::body("albumId", &[Id]),
    FieldRule::body("genreIds", &[IdList]),
];

pub const DELETE_TRACK: RuleSet = &[ID_PARAM];

pub const CREATE_GENRE: RuleSet = &[
    FieldRule::body("name", GENRE_NAME),
    FieldRule::body("description", DESCRIPTION),
];

pub const UPDATE_GENRE: RuleSet = &[
    ID_PARAM,
    FieldRule::body("name", OPTIONAL_GENRE_NAME),
    FieldRule::body("description", DESCRIPTION),
];

pub const CREATE_ALBUM: RuleSet = &[
    FieldRule::body("title", TITLE),
    FieldRule::body("description", DESCRIPTION),
];

pub const UPDATE_ALBUM: RuleSet = &[
    ID_PARAM,
    FieldRule::body("title", OPTIONAL_TITLE),
    FieldRule::body("description", DESCRIPTION),
];

/// Any route addressed only by `{id}`.
pub const BY_ID: RuleSet = &[ID_PARAM];
