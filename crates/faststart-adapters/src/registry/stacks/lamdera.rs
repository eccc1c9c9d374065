use faststart_core::domain::{CommandHint, DomainError, FileRole, StackDefinition, StackId};

use super::ELM_IGNORE;

const ELM_JSON: &str = r#"{
    "type": "application",
    "source-directories": [
        "src"
    ],
    "elm-version": "0.19.1",
    "dependencies": {
        "direct": {
            "elm/browser": "1.0.2",
            "elm/core": "1.0.5",
            "elm/html": "1.0.0",
            "elm/json": "1.1.3",
            "elm/url": "1.0.0",
            "lamdera/codecs": "1.0.0",
            "lamdera/core": "1.0.0"
        },
        "indirect": {
            "elm/bytes": "1.0.8",
            "elm/time": "1.0.0",
            "elm/virtual-dom": "1.0.3"
        }
    },
    "test-dependencies": {
        "direct": {},
        "indirect": {}
    }
}
"#;

const TYPES_ELM: &str = r#"module Types exposing (..)

import Browser exposing (UrlRequest)
import Browser.Navigation exposing (Key)
import Url exposing (Url)


type alias FrontendModel =
    { key : Key
    , message : String
    }


type alias BackendModel =
    { clicks : Int
    }


type FrontendMsg
    = UrlClicked UrlRequest
    | UrlChanged Url
    | Clicked
    | NoOpFrontendMsg


type ToBackend
    = ButtonClicked


type BackendMsg
    = NoOpBackendMsg


type ToFrontend
    = ClickCount Int
"#;

const FRONTEND_ELM: &str = r#"module Frontend exposing (..)

import Browser
import Browser.Navigation as Nav
import Html exposing (Html, button, div, h1, p, text)
import Html.Events exposing (onClick)
import Lamdera
import Types exposing (..)
import Url


app =
    Lamdera.frontend
        { init = init
        , onUrlRequest = UrlClicked
        , onUrlChange = UrlChanged
        , update = update
        , updateFromBackend = updateFromBackend
        , subscriptions = \_ -> Sub.none
        , view = view
        }


init : Url.Url -> Nav.Key -> ( FrontendModel, Cmd FrontendMsg )
init _ key =
    ( { key = key, message = "{{PROJECT_DESCRIPTION}}" }, Cmd.none )


update : FrontendMsg -> FrontendModel -> ( FrontendModel, Cmd FrontendMsg )
update msg model =
    case msg of
        UrlClicked _ ->
            ( model, Cmd.none )

        UrlChanged _ ->
            ( model, Cmd.none )

        Clicked ->
            ( model, Lamdera.sendToBackend ButtonClicked )

        NoOpFrontendMsg ->
            ( model, Cmd.none )


updateFromBackend : ToFrontend -> FrontendModel -> ( FrontendModel, Cmd FrontendMsg )
updateFromBackend msg model =
    case msg of
        ClickCount n ->
            ( { model | message = "Clicked " ++ String.fromInt n ++ " times" }, Cmd.none )


view : FrontendModel -> Browser.Document FrontendMsg
view model =
    { title = "{{PROJECT_NAME}}"
    , body =
        [ div []
            [ h1 [] [ text "{{PROJECT_NAME}}" ]
            , p [] [ text model.message ]
            , button [ onClick Clicked ] [ text "Click" ]
            ]
        ]
    }
"#;

const BACKEND_ELM: &str = r#"module Backend exposing (..)

import Lamdera exposing (ClientId, SessionId)
import Types exposing (..)


app =
    Lamdera.backend
        { init = ( { clicks = 0 }, Cmd.none )
        , update = \_ model -> ( model, Cmd.none )
        , updateFromFrontend = updateFromFrontend
        , subscriptions = \_ -> Sub.none
        }


updateFromFrontend : SessionId -> ClientId -> ToBackend -> BackendModel -> ( BackendModel, Cmd BackendMsg )
updateFromFrontend _ clientId msg model =
    case msg of
        ButtonClicked ->
            let
                clicks =
                    model.clicks + 1
            in
            ( { model | clicks = clicks }, Lamdera.sendToFrontend clientId (ClickCount clicks) )
"#;

pub(super) fn definition() -> Result<StackDefinition, DomainError> {
    StackDefinition::builder(StackId::Lamdera)
        .file("elm.json", FileRole::Manifest, ELM_JSON)
        .file("src/Types.elm", FileRole::Source, TYPES_ELM)
        .file("src/Frontend.elm", FileRole::Source, FRONTEND_ELM)
        .file("src/Backend.elm", FileRole::Source, BACKEND_ELM)
        .ignore_rules(ELM_IGNORE)
        .post_install(CommandHint::always("npm install -g lamdera"))
        .post_install(CommandHint::always("lamdera live"))
        .build()
}
