/// Шаг диалога, определяющий как трактуется следующее событие
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Greeting,
    CityChoice,
    OtherCity,
    SunQuestion,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserState {
    pub mode: Mode,
    /// HH:MM, пусто до первого успешного запроса
    pub sunrise: String,
    pub sunset: String,
}
